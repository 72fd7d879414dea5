//! Café Menu Frontend Entry Point

mod actions;
mod app;
mod components;
mod dialog;
mod models;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
