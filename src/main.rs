//! E-Challan Frontend Entry Point

mod api;
mod app;
mod cascade;
mod components;
mod config;
mod context;
mod error;
mod forms;
mod listing;
mod models;
mod notify;
mod ocr;
mod plate;
mod session;
mod status;
mod store;
mod throttle;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if rolling_logger::init(config::log_level(), config::LOG_CAPACITY).is_err() {
        web_sys::console::warn_1(&"[APP] logger already installed".into());
    }
    log::info!("[APP] starting, backend at {}", config::api_base());
    mount_to_body(App);
}
