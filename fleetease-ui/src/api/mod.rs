//! API access from the browser

pub mod client;

pub use client::{get_api_base, BrowserTransport, BrowserApi};
