//! Session context persisted by the login page, plus the active view enum.

use wasm_bindgen::prelude::*;

use crate::constants::{STORAGE_ROLE_KEY, STORAGE_STAFF_ID_KEY};
use crate::roles::Role;

// Which top-level panel is showing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveView {
    #[default]
    Dashboard,
    AddStudent,
}

/// Role and staff id of the signed-in user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub role: Role,
    pub staff_id: Option<u32>,
}

impl Session {
    /// Build a session from raw stored strings. Unknown roles fall back to
    /// admin; unparsable staff ids are dropped.
    pub fn from_raw(role: Option<&str>, staff_id: Option<&str>) -> Self {
        let role = match role.map(str::parse::<Role>) {
            Some(Ok(role)) => role,
            Some(Err(e)) => {
                crate::debug_log!("{}; defaulting to admin", e);
                Role::Admin
            }
            None => Role::Admin,
        };
        let staff_id = staff_id.and_then(|raw| raw.trim().parse::<u32>().ok());
        Self { role, staff_id }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the session saved under `role` / `staffId`.
pub fn load_session() -> Session {
    let storage = match local_storage() {
        Some(s) => s,
        None => return Session::default(),
    };
    let role = storage.get_item(STORAGE_ROLE_KEY).ok().flatten();
    let staff_id = storage.get_item(STORAGE_STAFF_ID_KEY).ok().flatten();
    Session::from_raw(role.as_deref(), staff_id.as_deref())
}

fn save_session(session: &Session) -> Result<(), JsValue> {
    let storage = local_storage().ok_or_else(|| JsValue::from_str("localStorage unavailable"))?;
    storage.set_item(STORAGE_ROLE_KEY, session.role.as_str())?;
    match session.staff_id {
        Some(id) => storage.set_item(STORAGE_STAFF_ID_KEY, &id.to_string())?,
        None => storage.remove_item(STORAGE_STAFF_ID_KEY)?,
    }
    Ok(())
}

/// Let the host page set the role and staff id, e.g. right after login.
#[wasm_bindgen]
pub fn init_session_js(role: &str, staff_id: Option<u32>) -> Result<(), JsValue> {
    let role = role
        .parse::<Role>()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let session = Session { role, staff_id };
    save_session(&session)?;
    crate::state::dispatch_global_message(crate::messages::Message::SessionChanged(session));
    Ok(())
}
