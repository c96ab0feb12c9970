//! Admin panel pages

pub mod customers;
pub mod dashboard;
pub mod gps;
pub mod locations;
pub mod login;
pub mod new_reservation;
pub mod payments;
pub mod register;
pub mod reports;
pub mod reservations;
pub mod support;
pub mod theme_store;
pub mod vehicles;

pub use customers::Customers;
pub use dashboard::Dashboard;
pub use gps::Gps;
pub use locations::Locations;
pub use login::Login;
pub use new_reservation::NewReservation;
pub use payments::Payments;
pub use register::Register;
pub use reports::Reports;
pub use reservations::Reservations;
pub use support::Support;
pub use theme_store::ThemeStore;
pub use vehicles::Vehicles;
