//! AuraList Frontend Entry Point

mod actions;
mod api;
mod app;
mod components;
mod context;
mod models;
mod parser;
mod speech;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
