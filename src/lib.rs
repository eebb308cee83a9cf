pub mod app;
pub mod components;
pub mod config;
pub mod errors;
pub mod forms;
pub mod models;
pub mod storage;
pub mod store;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount_to_body(App);
}
