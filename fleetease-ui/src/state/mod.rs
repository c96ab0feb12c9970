//! State Management
//!
//! Toasts and site mode, the two sign-in sessions, and the glue that runs
//! `fleetease` page controllers inside signals.

pub mod auth;
pub mod global;
pub mod page;
pub mod storage;

pub use auth::{provide_auth, use_auth, AuthContext, Session};
pub use global::{provide_global_state, use_global, GlobalState};
pub use page::{begin, drive, drive_then};
pub use storage::LocalStorage;
