//! Studio Energiya Website
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly.
//!
//! # Pages
//!
//! - `/` - studio overview, trainers, achievements and gallery
//! - `/trainer/:id` - trainer profile with certificates and lessons
//! - `/trainer/:trainerId/lesson/:lessonTitle` - lesson schedule and prices
//!
//! The site document is embedded at compile time from `data/site.json`.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
