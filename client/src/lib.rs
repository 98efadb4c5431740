//! # client
//!
//! Leptos frontend for the Gurumitra classroom assistant. Renders on the
//! server for first paint and hydrates in the browser.
//!
//! This crate contains pages, components, per-view state machines, the
//! notification queue, and the HTTP calls to the generation API.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
