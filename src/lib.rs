//! # preservation-client
//!
//! Leptos + WASM frontend for the equipment maintenance ("preservation")
//! application: session persistence, API credentials and route access
//! control, plus the page shell around them.
//!
//! Build with `--features csr` for the browser bundle. Without it the crate
//! compiles the same state, routing and config logic with inert browser
//! adapters, which is what the unit tests exercise.

pub mod app;
pub mod boot;
pub mod config;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;

/// WASM entry point: logging, panic hook, config, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();

    let (config, config_error) = match config::AppConfig::from_build_env() {
        Ok(config) => (config, None),
        Err(e) => (config::AppConfig::default(), Some(e)),
    };
    let _ = console_log::init_with_level(config.log_level);
    if let Some(e) = config_error {
        log::error!("config: {e}; falling back to defaults");
    }

    leptos::mount::mount_to_body(move || view! { <App config=config/> });
}
