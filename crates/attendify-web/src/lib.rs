/// Attendify Web Portal
///
/// Leptos-based attendance portal with role-aware navigation, built for
/// server-side rendering with WebAssembly hydration.

pub mod app;
pub mod auth;
pub mod components;
pub mod pages;
pub mod types;
pub mod utils;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount_to_body(App);
}
