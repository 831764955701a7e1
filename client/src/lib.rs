//! # client
//!
//! Leptos frontend for the device inventory.
//!
//! This crate contains the device form and list components, the page that
//! owns the inventory, headless state for both, and REST helpers. The server
//! crate renders it with the `ssr` feature; the browser bundle hydrates it
//! with the `hydrate` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
