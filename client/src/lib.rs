//! # client
//!
//! Leptos + WASM frontend for the credentials portal: a login page at `/`,
//! a signup page at `/signup` and a static dashboard at `/dashboard`.
//!
//! Each form keeps its draft locally, posts it once per click to the auth
//! API, and shows the returned message. Failures are logged to the browser
//! console only.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
