//! Sign-in sessions
//!
//! Operators and booking-site customers sign in independently; each
//! audience gets its own [`Session`] with its own API client and
//! `localStorage` keys.

use fleetease::auth::CustomerSignup;
use fleetease::models::{RegisterRequest, User};
use fleetease::{AuthError, AuthService, AuthState};
use leptos::*;

use crate::api::{BrowserApi, BrowserTransport};
use crate::state::storage::LocalStorage;

/// One audience's sign-in plus the client carrying its bearer token
#[derive(Clone, Copy)]
pub struct Session {
    service: RwSignal<AuthService<LocalStorage>>,
    api: StoredValue<BrowserApi>,
}

impl Session {
    fn new(service: AuthService<LocalStorage>, api_base: &str) -> Self {
        Self {
            service: create_rw_signal(service),
            api: store_value(BrowserApi::new(BrowserTransport::new(api_base))),
        }
    }

    /// Current auth state, tracked
    pub fn state(&self) -> AuthState {
        self.service.with(|service| service.state().clone())
    }

    pub fn user(&self) -> Option<User> {
        self.service.with(|service| service.state().user().cloned())
    }

    /// Client for this audience; clones share the token
    pub fn api(&self) -> BrowserApi {
        self.api.get_value()
    }

    /// Check the stored token in the background
    pub fn restore(&self) {
        let session = *self;
        spawn_local(async move {
            let api = session.api();
            let mut service = session.service.get_untracked();
            service.restore(&api).await;
            session.service.set(service);
        });
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let api = self.api();
        let mut service = self.service.get_untracked();
        let result = service.login(&api, email, password).await;
        self.service.set(service);
        result
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<User, AuthError> {
        let api = self.api();
        let mut service = self.service.get_untracked();
        let result = service.register(&api, request).await;
        self.service.set(service);
        result
    }

    pub async fn register_customer(&self, signup: &CustomerSignup) -> Result<User, AuthError> {
        let api = self.api();
        let mut service = self.service.get_untracked();
        let result = service.register_customer(&api, signup).await;
        self.service.set(service);
        result
    }

    pub fn logout(&self) {
        let api = self.api();
        self.service.update(|service| service.logout(&api));
    }
}

/// Both sessions, provided at the root
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub operator: Session,
    pub customer: Session,
}

/// Provide both sessions and start restoring them
pub fn provide_auth(api_base: &str) -> AuthContext {
    let auth = AuthContext {
        operator: Session::new(AuthService::operator(LocalStorage), api_base),
        customer: Session::new(AuthService::customer(LocalStorage), api_base),
    };
    provide_context(auth);
    auth.operator.restore();
    auth.customer.restore();
    auth
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext not found")
}
