//! # client
//!
//! Leptos + WASM frontend for the profiler home screen: onboarding guidance
//! for the Firefox profiler menu button, and the load-from-file and
//! load-from-URL entry points into the profile loader.
//!
//! Browser-only code sits behind the `hydrate` feature; the `ssr` feature
//! renders the same components on the server.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
