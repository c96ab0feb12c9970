//! Admin Panel Pages
//!
//! One controller per panel screen. A controller owns the screen's data
//! and form state; every async operation takes the API handle and a
//! [`Notifier`](crate::notify::Notifier) and returns whether it succeeded.
//!
//! After a successful mutation the controller reloads its list from the
//! server instead of patching it locally, then raises a success notice.
//! A failed call raises the server's `detail` (or a fixed fallback) and
//! leaves the controller untouched.

mod customers;
mod dashboard;
mod gps;
mod locations;
mod payments;
mod reports;
mod reservations;
mod support;
mod theme_store;
mod vehicles;

pub use customers::CustomersPage;
pub use dashboard::{DashboardPage, RECENT_LIMIT};
pub use gps::{GpsPage, GPS_REFRESH_INTERVAL};
pub use locations::LocationsPage;
pub use payments::PaymentsPage;
pub use reports::{ReportFigure, ReportsPage};
pub use reservations::{NewReservationPage, ReservationsPage};
pub use support::SupportPage;
pub use theme_store::ThemeStorePage;
pub use vehicles::VehiclesPage;
