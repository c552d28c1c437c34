pub mod api;
pub mod config;
pub mod pages;
pub mod state;
pub mod utils;

pub use api::{ApiClient, ApiError, Session, SessionMode, SessionStore};
pub use config::{ClientConfig, ConfigError};

/// Routes `log` output to the browser console and panics to `console.error`.
#[cfg(target_arch = "wasm32")]
pub fn init_browser_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    init_browser_logging();
    log::info!("Starting HR admin client (wasm)");
}
