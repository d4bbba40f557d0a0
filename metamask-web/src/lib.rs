//! Browser frontend for the MetaMask connection adapter.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod hooks;
pub mod services;
pub mod state;

use app::App;

#[wasm_bindgen(start)]
pub fn start() {
    // Panic messages and logs go to the browser console.
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("metamask-web starting");

    leptos::mount::mount_to_body(|| view! { <App/> });
}
