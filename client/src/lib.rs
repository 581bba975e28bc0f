//! # client
//!
//! Leptos + WASM frontend for the merchant console: public sign-in pages, the
//! session gate, and the navigation shell around the business sections.
//!
//! Compiled twice: with `ssr` into the axum host for server rendering, and
//! with `hydrate` into the browser bundle that owns every network call.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point invoked by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
