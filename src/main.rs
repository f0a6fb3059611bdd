//! Collector Point Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod geolocation;
mod map;
mod pages;

use app::App;
use config::CONFIG;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level));
    log::info!("[APP] Backend {} | geography {}", CONFIG.backend_url, CONFIG.geography_url);
    mount_to_body(App);
}
