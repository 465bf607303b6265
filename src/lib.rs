//! # intake-client
//!
//! Leptos + WASM frontend for the patient-intake application: a multi-section
//! registration form, a drag-and-drop uploader for identification documents,
//! a passkey-gated admin route, and a dark-by-default theme host.
//!
//! This crate contains pages, components, client state, the network layer
//! for the registration backend, and the validation rule set the form
//! delegates to.

pub mod app;
pub mod components;
pub mod constants;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydration entry point invoked by the generated WASM bootstrap.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
