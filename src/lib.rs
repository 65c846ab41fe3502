#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod catalog;
pub mod contact;
mod content;
pub mod gallery;
pub mod profile;
pub mod skills;
pub mod typewriter;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // ignore the error if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
