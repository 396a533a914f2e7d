//! Leadboard Frontend Entry Point

mod analytics;
mod app;
mod board;
mod components;
mod context;
mod error;
mod leads;
mod logging;
mod models;
mod services;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = logging::init(log::LevelFilter::Info) {
        web_sys::console::warn_1(&format!("Failed to install logger: {err}").into());
    }
    mount_to_body(App);
}
