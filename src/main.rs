//! To-Do Mobile Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod logger;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;
use todo_core::config::TodoConfig;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = config::load();
    let level = loaded
        .as_ref()
        .ok()
        .and_then(|c| c.level_filter().ok())
        .unwrap_or(LevelFilter::Info);
    logger::init(level);

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("[CONFIG] {}, using defaults", e);
        TodoConfig::default()
    });
    log::info!("[APP] starting: {}", config.title);

    mount_to_body(move || view! { <App config=config /> });
}
