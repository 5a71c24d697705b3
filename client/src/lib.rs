//! # client
//!
//! Leptos + WASM frontend for the clinic admin dashboard: a sidebar layout,
//! a landing page, and one generic record screen instantiated for patients
//! and doctors.
//!
//! The crate is built twice: with `hydrate` as the browser bundle and with
//! `ssr` as a library the `server` crate renders from.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
