//! # storefront-client
//!
//! Leptos + WASM behavior layer for the storefront web application: product
//! fetches, cart persistence, notification toasts, price-input validation,
//! and the mobile navigation drawer with swipe-to-close.
//!
//! This crate contains pages, components, application state, the typed API
//! layer, and the shared HTTP client that applies credential and
//! session-expiry policy to every request.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install the panic hook and console logger, then
/// hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
