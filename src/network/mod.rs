// Re-export network modules
pub mod api_client;
pub mod config;

pub use api_client::ApiClient;
pub use config::ApiConfig;

use lazy_static::lazy_static;
use std::sync::RwLock;
use wasm_bindgen::prelude::*;

lazy_static! {
    static ref API_CONFIG: RwLock<Option<ApiConfig>> = RwLock::new(None);
}

/// Initialize the API configuration from the build environment.
pub fn init_api_config() {
    if let Ok(mut guard) = API_CONFIG.write() {
        if guard.is_none() {
            *guard = Some(ApiConfig::new());
        }
    }
}

/// Initialize the API configuration from a JS-provided URL.
/// Lets the host page point the admin UI at a different backend at runtime.
/// The host can only call this after `start()`, so the list is re-fetched
/// from the new backend.
#[wasm_bindgen]
pub fn init_api_config_js(api_base_url: &str) -> Result<(), JsValue> {
    crate::debug_log!("Initializing API config from JS: {}", api_base_url);
    if replace_api_config(ApiConfig::from_url(api_base_url)) {
        crate::state::dispatch_global_message(crate::messages::Message::ApiConfigChanged);
    }
    Ok(())
}

/// Install `config`, overriding whatever was set before. Returns true when
/// the base URL actually changed.
pub(crate) fn replace_api_config(config: ApiConfig) -> bool {
    let mut guard = match API_CONFIG.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    let changed = guard.as_ref() != Some(&config);
    *guard = Some(config);
    changed
}

/// Snapshot of the active configuration; same-origin when never initialised.
pub(crate) fn api_config() -> ApiConfig {
    API_CONFIG
        .read()
        .ok()
        .and_then(|guard| guard.clone())
        .unwrap_or_default()
}
