//! # FleetEase
//!
//! Client core of the FleetEase vehicle-rental platform: the operator
//! admin panel and the public booking site, both talking to the remote
//! FleetEase REST API.
//!
//! ## Modules
//!
//! - [`models`]: Serde reflections of the API entities and form checks
//! - [`client`]: Typed API calls over a pluggable [`Transport`](client::Transport)
//! - [`session`]: Token and user persistence for operators and customers
//! - [`auth`]: Sign-in state machine
//! - [`access`]: Site modes, role-based menu and route guards
//! - [`panel`]: Admin panel page controllers
//! - [`storefront`]: Public booking site page controllers
//! - [`theme`]: Storefront theme resolution
//! - [`reconcile`]: Merging background results into live page state
//! - [`web`]: Static host for the browser bundle (`native` feature)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fleetease::auth::AuthService;
//! use fleetease::client::{FleetApi, HttpTransport};
//! use fleetease::session::MemoryStore;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = FleetApi::new(HttpTransport::new("http://localhost:8001", Duration::from_secs(30))?);
//!     let mut auth = AuthService::operator(MemoryStore::new());
//!
//!     let user = auth.login(&api, "admin@example.com", "secret").await?;
//!     println!("Signed in as {} ({})", user.full_name, user.role.label());
//!
//!     let vehicles = api.vehicles(None).await?;
//!     println!("{} vehicles in the fleet", vehicles.len());
//!     Ok(())
//! }
//! ```

pub mod access;
pub mod auth;
pub mod client;
pub mod models;
pub mod notify;
pub mod panel;
pub mod quote;
pub mod reconcile;
pub mod session;
pub mod storefront;
pub mod theme;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod web;

pub use auth::{AuthError, AuthService, AuthState};
pub use client::{ApiRequest, ApiResponse, ClientError, FleetApi, Method, Transport};
pub use notify::Notifier;
pub use session::{KeyValueStore, MemoryStore, Namespace, SessionStore, StoreError};

#[cfg(feature = "native")]
pub use client::HttpTransport;
#[cfg(feature = "native")]
pub use config::{Config, ConfigError};
