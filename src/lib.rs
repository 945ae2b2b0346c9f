//! FlowShot - landing site for the studio workflow platform
//!
//! A single scrolling marketing page with an animated product mockup, a
//! scroll-driven product walkthrough and a waitlist signup, built with Leptos
//! and WebAssembly.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
