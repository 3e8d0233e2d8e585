//! Joyful Dogs Frontend Entry Point

mod models;
mod error;
mod config;
mod logger;
mod api;
mod pagination;
mod banner;
mod store;
mod actions;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init();
    mount_to_body(App);
}
