//! Wallet-connect navigation shell - Leptos frontend
//!
//! A client-side-rendered shell around a hosted wallet-connection SDK:
//! a responsive navigation bar, a toast notification surface, and the
//! SDK bootstrap wiring.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod pages;
pub mod services;
pub mod state;
pub mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logger
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("wallet-shell starting");

    leptos::mount::mount_to_body(|| view! { <App/> });
}
