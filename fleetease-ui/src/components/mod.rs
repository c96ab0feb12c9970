//! UI Components
//!
//! Reusable Leptos components shared by the admin panel and the public site.

pub mod badge;
pub mod filter;
pub mod guard;
pub mod layout;
pub mod loading;
pub mod modal;
pub mod sidebar;
pub mod toast;

pub use badge::Badge;
pub use filter::FilterButton;
pub use guard::{CustomerOnly, GuestOnly, Protected};
pub use layout::{AdminShell, SiteLayout};
pub use loading::{EmptyState, InlineLoading, Loading};
pub use modal::Modal;
pub use sidebar::Sidebar;
pub use toast::Toast;
