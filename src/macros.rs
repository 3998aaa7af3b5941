//! Small crate-wide convenience macros.

/// Log a formatted line to the browser console.
///
/// Compiles to `console.log` on `wasm32` and to nothing on native builds so
/// reducers stay callable from plain `cargo test`.
///
/// ```rust,ignore
/// debug_log!("Loaded {} students", students.len());
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format!($($arg)*);
        }
    }};
}

/// Same as [`debug_log!`] but routed to `console.error`.
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::error_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format!($($arg)*);
        }
    }};
}
