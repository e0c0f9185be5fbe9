//! # leadcall-client
//!
//! Leptos + WASM frontend for the lead-capture form.
//!
//! A visitor enters name, email, phone (with a country dial code) and business
//! name. Submitting stores a lead record and asks the server to place an
//! outbound AI phone call to the composed number.
//!
//! Pure state (dial-code table, selector reducer, form validation, submission
//! counter, submit pipeline) lives in `state`, `util` and `net::submit` so it
//! can be tested natively. Browser glue is gated behind the `hydrate` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/console hooks and hydrate the SSR body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
