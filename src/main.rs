//! RMS Frontend Entry Point

mod models;
mod config;
mod api;
mod context;
mod lifecycle;
mod store;
mod components;
mod pages;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
    }

    let cfg = config::init();
    log::info!("[APP] Using backend at {}", cfg.api_base_url);

    mount_to_body(App);
}
