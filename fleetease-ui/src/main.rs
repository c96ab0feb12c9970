//! FleetEase Web App
//!
//! One Leptos (WASM) bundle for both audiences of a rental company:
//!
//! - the operator admin panel (fleet, reservations, customers, payments,
//!   locations, support, theme store)
//! - the public booking site (home, catalog, vehicle detail, booking,
//!   customer account)
//!
//! # Architecture
//!
//! Page state and API calls live in the `fleetease` library; this crate
//! holds the views, a `gloo-net` transport and `localStorage` sessions.
//! On a `panel.` host the admin panel owns the root, elsewhere it sits
//! under `/admin`.

use leptos::*;

mod api;
mod app;
mod components;
mod format;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
