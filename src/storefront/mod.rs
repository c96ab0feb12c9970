//! Public Booking Site
//!
//! Controllers for the customer-facing pages. They talk to the public
//! endpoints, plus the customer's own session for booking and the account
//! page. Same conventions as [`panel`](crate::panel): async operations
//! report through a [`Notifier`](crate::notify::Notifier) and return
//! whether they succeeded.

mod account;
mod booking;
mod catalog;
mod home;
mod vehicle_detail;

pub use account::AccountPage;
pub use booking::{BookingPage, BookingStep, CONSENT_REQUIRED};
pub use catalog::{CatalogFilters, CatalogPage, DEFAULT_PRICE_RANGE};
pub use home::{HomePage, FEATURED_LIMIT};
pub use vehicle_detail::{booking_url, VehicleDetailPage};
