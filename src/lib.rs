//! # shifa-clinic
//!
//! Leptos + WASM front-office client for the Shifa clinic REST backend.
//!
//! The session store in `state::session` owns the authentication lifecycle;
//! `util::auth` decides what each route may show, and the pages under
//! `pages` are thin views over the `net::api` client.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and mounts the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {err}");
    }
    leptos::mount::mount_to_body(app::App);
}
