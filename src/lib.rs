//! # webgis-client
//!
//! Leptos + WASM frontend for the WebGIS satellite-imagery dashboard.
//! Replaces the React + OpenLayers client with a Rust-native UI layer.
//!
//! This crate contains pages, components, application state, data types,
//! and the stubbed session boundary. The map-rendering widget, toast
//! system, and all styling are external collaborators.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point. Hydrates the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
