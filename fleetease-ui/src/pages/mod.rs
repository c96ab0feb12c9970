//! Pages
//!
//! Top-level page components for each route.

pub mod admin;
mod form;
pub mod not_found;
pub mod site;

pub use not_found::NotFound;
