//! # client
//!
//! Leptos + WASM frontend for the login portal.
//!
//! This crate renders the login page and adapts the browser to the seams of
//! the `auth` crate: `localStorage` for the session token and redirect target,
//! `fetch` (through `gloo-net`) for the credential exchange, and the Leptos
//! router for client-side navigation.

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
