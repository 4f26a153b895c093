#![allow(warnings)]
//! Complaint Portal Frontend Entry Point

mod app;
mod browser;
mod components;
mod config;
mod context;
mod draft;
mod error;
mod models;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use ring_logger::{RingLogger, DEFAULT_CAPACITY};

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match AppConfig::from_document() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    let logger = match RingLogger::init(config.log_level_filter(), DEFAULT_CAPACITY) {
        Ok(logger) => Some(logger),
        Err(e) => {
            web_sys::console::error_1(&format!("[Main] Logger already installed: {}", e).into());
            None
        }
    };
    if let Some(e) = config_error {
        log::warn!("[Main] {}; using defaults", e);
    }
    log::info!(
        "[Main] Starting at {:.4}, {:.4}, reset after {} ms",
        config.map.default_center.lat,
        config.map.default_center.lng,
        config.reset_delay_ms
    );

    mount_to_body(move || view! { <App config=config logger=logger /> });
}
