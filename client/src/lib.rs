//! # client
//!
//! Leptos + WASM frontend for the HireHub job board.
//!
//! This crate contains the router, pages, components, application state,
//! REST helpers, and UI utilities. The `hirehub` server crate renders it with
//! the `ssr` feature; the browser bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and hydrates the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
