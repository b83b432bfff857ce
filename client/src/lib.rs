//! # repo-doc-bot-client
//!
//! Leptos + WASM frontend for the repository documentation bot.
//!
//! The user submits a repository URL for ingestion (or reuses an existing
//! index), then chats with the backend in plain retrieval mode or in stateful
//! agent mode. `app` hosts the controller and the two views; `classic` drives
//! the same flows from static HTML pages with direct DOM handlers.

pub mod app;
pub mod classic;
pub mod components;
pub mod config;
pub mod controller;
pub mod net;
pub mod state;
pub mod util;

/// Browser entry point called by the hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    init_browser_logging();
    leptos::mount::hydrate_body(app::App);
}

/// Route `log` output and panics to the browser console. Safe to call twice.
#[cfg(feature = "hydrate")]
pub(crate) fn init_browser_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}
