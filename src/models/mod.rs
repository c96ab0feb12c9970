//! API Data Model
//!
//! Serde reflections of the entities served by the FleetEase REST API.
//! The server owns validation and relational integrity; the only rules
//! enforced here are the form checks in [`forms`].

pub mod forms;
mod fleet;
mod operations;
mod support;
mod theme;
mod user;

pub use fleet::{
    FuelType, Location, Transmission, Vehicle, VehicleDraft, VehiclePosition, VehicleStatus,
};
pub use forms::{FormError, LocationForm};
pub use operations::{
    Customer, CustomerDraft, DashboardStats, Payment, PaymentDraft, PaymentStatus, Reservation,
    ReservationDraft, ReservationStatus,
};
pub use support::{
    NewTicket, SenderType, SupportTicket, TicketCategory, TicketMessage, TicketPriority,
    TicketStatus,
};
pub use theme::{PublicTheme, SliderImage, Theme, ThemeColors, ThemeSettings, DEFAULT_THEME_ID};
pub use user::{
    Company, LoginRequest, RegisterRequest, Role, TokenResponse, User, OPERATOR_ROLES,
};
