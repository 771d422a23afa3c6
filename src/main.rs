//! TaskMaster Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod directory;
mod dom;
mod error;
mod models;
mod storage;
mod store;
mod tasks;
mod theme;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    // Only fails if a logger is already installed
    #[cfg(target_arch = "wasm32")]
    let _ = console_log::init_with_level(if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    });
    log::info!("starting {}", config::APP_NAME);
    mount_to_body(App);
}
