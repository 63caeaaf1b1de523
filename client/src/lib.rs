//! # mindora-client
//!
//! Leptos + WASM frontend for MINDORA.ART, a site for sharing art, science,
//! literature, and audio works.
//!
//! This crate contains the session observer, the sign-in/sign-up controller,
//! notifications, the post-login redirect coordinator, page components, and
//! a Firebase REST backend. Browser-only code sits behind the `csr` feature;
//! native builds compile the same logic with inert browser stubs so it can
//! be unit tested.

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
