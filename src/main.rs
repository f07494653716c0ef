//! zakupAI Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controller;
mod models;
mod selection;
mod session;
mod state;
mod store;
mod text;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    mount_to_body(App);
}
