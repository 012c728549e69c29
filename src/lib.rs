#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod contact;
pub mod content;
#[cfg(feature = "ssr")]
pub mod relay;
pub mod scroll;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // errors here only mean a logger is already installed
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
