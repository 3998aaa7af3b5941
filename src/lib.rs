use wasm_bindgen::prelude::*;

#[macro_use]
pub mod macros;

pub mod command_executors;
pub mod components;
pub mod constants;
pub mod dom_utils;
pub mod forms;
pub mod messages;
pub mod models;
pub mod network;
pub mod reducers;
pub mod roles;
pub mod state;
pub mod storage;
pub mod toast;
pub mod update;
pub mod utils;
pub mod views;

use messages::Message;

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    network::init_api_config();

    let session = storage::load_session();
    debug_log!(
        "Starting fees admin as {} (staff id {:?})",
        session.role.as_str(),
        session.staff_id
    );
    state::APP_STATE.with(|state| state.borrow_mut().session = session);

    state::AppState::refresh_ui_after_state_change()?;

    // The student list fetches on mount
    state::dispatch_global_message(Message::LoadStudents);

    Ok(())
}
