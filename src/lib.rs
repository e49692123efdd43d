pub mod active_section;
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod config;
pub mod content;
pub mod hooks;
pub mod menu;
pub mod nav_visibility;
pub mod reveal;
pub mod viewport;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // fails only if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("hydrating, built {}", env!("BUILD_TIME"));
    leptos::mount::hydrate_body(App);
}
