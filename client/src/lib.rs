//! # cadence-client
//!
//! Leptos + WASM frontend for the Cadence dashboard: header chrome and the
//! conversations page.
//!
//! This crate contains pages, components, application state, the wire
//! types, and the HTTP message gateway. The conversation state machine in
//! `state::conversation` is plain Rust and runs natively in tests.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered HTML.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
