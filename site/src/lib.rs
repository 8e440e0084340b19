//! # site
//!
//! Leptos + WASM frontend for the JEIL Packaging brochure site.
//!
//! This crate contains the root container, theme state, the static route
//! table, the page transition shell, chrome, pages and motion helpers. It
//! drives the `scene` crate for the decorative background through the
//! `SceneLayer` host component.

pub mod app;
pub mod company;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger init failed: {err}").into());
    }
    log::info!("site: hydrating");
    leptos::mount::hydrate_body(app::App);
}
