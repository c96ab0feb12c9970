//! Authentication State
//!
//! Holds who is signed in and keeps the stored session and the client's
//! bearer token in step. Operators and booking-site customers each get
//! their own [`AuthService`], backed by separate storage keys.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::client::{ClientError, FleetApi, Transport};
use crate::models::{Company, CustomerDraft, FormError, RegisterRequest, Role, User};
use crate::session::{KeyValueStore, Namespace, SessionStore};

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTER_FAILED: &str = "Registration failed";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    /// Stored session not checked yet
    #[default]
    Loading,
    Anonymous,
    Authenticated {
        user: User,
        company: Option<Company>,
    },
}

impl AuthState {
    pub fn user(&self) -> Option<&User> {
        match self {
            AuthState::Authenticated { user, .. } => Some(user),
            _ => None,
        }
    }

    pub fn company(&self) -> Option<&Company> {
        match self {
            AuthState::Authenticated { company, .. } => company.as_ref(),
            _ => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AuthState::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated { .. })
    }
}

/// Failed sign-in or sign-up; displays as the message for the user
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("{message}")]
    Rejected {
        message: String,
        #[source]
        source: ClientError,
    },

    #[error("{0}")]
    Invalid(#[from] FormError),
}

impl AuthError {
    fn rejected(source: ClientError, fallback: &str) -> Self {
        AuthError::Rejected {
            message: source.user_message(fallback),
            source,
        }
    }
}

/// Booking-site sign-up form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerSignup {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub tc_no: String,
    pub password: String,
}

impl CustomerSignup {
    fn customer_draft(&self) -> CustomerDraft {
        CustomerDraft {
            tc_no: self.tc_no.trim().to_string(),
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            ..Default::default()
        }
    }
}

/// Sign-in state for one audience
#[derive(Debug, Clone)]
pub struct AuthService<S> {
    session: SessionStore<S>,
    state: AuthState,
}

impl<S: KeyValueStore> AuthService<S> {
    /// Admin panel session (`token` / `user`)
    pub fn operator(store: S) -> Self {
        Self::new(store, Namespace::Operator)
    }

    /// Booking-site session (`customer_token` / `customer_user`)
    pub fn customer(store: S) -> Self {
        Self::new(store, Namespace::Customer)
    }

    pub fn new(store: S, namespace: Namespace) -> Self {
        Self {
            session: SessionStore::new(store, namespace),
            state: AuthState::Loading,
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    /// Resume a stored session, or settle on anonymous.
    ///
    /// The stored token is attached and checked against `/api/auth/me`;
    /// a rejected token ends the session.
    pub async fn restore<T: Transport>(&mut self, api: &FleetApi<T>) -> &AuthState {
        let Some(stored) = self.session.load() else {
            self.state = AuthState::Anonymous;
            return &self.state;
        };

        api.set_token(stored.token);
        match api.me().await {
            Ok(user) => {
                debug!(user = %user.email, role = %user.role, "Session restored");
                let company = self.fetch_company(api, &user).await;
                self.state = AuthState::Authenticated { user, company };
            }
            Err(e) => {
                warn!(error = %e, "Stored session rejected, signing out");
                self.logout(api);
            }
        }
        &self.state
    }

    pub async fn login<T: Transport>(
        &mut self,
        api: &FleetApi<T>,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        let response = api
            .login(email.trim(), password)
            .await
            .map_err(|e| AuthError::rejected(e, LOGIN_FAILED))?;
        info!(user = %response.user.email, "Signed in");
        self.establish(api, response.access_token, response.user.clone())
            .await;
        Ok(response.user)
    }

    pub async fn register<T: Transport>(
        &mut self,
        api: &FleetApi<T>,
        request: &RegisterRequest,
    ) -> Result<User, AuthError> {
        let response = api
            .register(request)
            .await
            .map_err(|e| AuthError::rejected(e, REGISTER_FAILED))?;
        info!(user = %response.user.email, "Account registered");
        self.establish(api, response.access_token, response.user.clone())
            .await;
        Ok(response.user)
    }

    /// Register a `musteri` account, then create its customer record.
    ///
    /// The session is stored only once both calls succeeded.
    pub async fn register_customer<T: Transport>(
        &mut self,
        api: &FleetApi<T>,
        signup: &CustomerSignup,
    ) -> Result<User, AuthError> {
        let draft = signup.customer_draft();
        draft.validate()?;

        let request = RegisterRequest {
            email: draft.email.clone(),
            password: signup.password.clone(),
            full_name: draft.full_name.clone(),
            role: Some(Role::Musteri),
            company_id: None,
            phone: Some(draft.phone.clone()),
        };
        let response = api
            .register(&request)
            .await
            .map_err(|e| AuthError::rejected(e, REGISTER_FAILED))?;

        let previous = api.token();
        api.set_token(response.access_token.clone());
        if let Err(e) = api.create_customer(&draft).await {
            match previous {
                Some(token) => api.set_token(token),
                None => api.clear_token(),
            }
            return Err(AuthError::rejected(e, REGISTER_FAILED));
        }

        self.establish(api, response.access_token, response.user.clone())
            .await;
        Ok(response.user)
    }

    /// Forget the stored session and detach the bearer
    pub fn logout<T: Transport>(&mut self, api: &FleetApi<T>) {
        if let Err(e) = self.session.clear() {
            warn!(error = %e, "Failed to clear stored session");
        }
        api.clear_token();
        self.state = AuthState::Anonymous;
    }

    async fn establish<T: Transport>(&mut self, api: &FleetApi<T>, token: String, user: User) {
        if let Err(e) = self.session.save(&token, &user) {
            warn!(error = %e, "Session will not survive a reload");
        }
        api.set_token(token);
        let company = self.fetch_company(api, &user).await;
        self.state = AuthState::Authenticated { user, company };
    }

    /// Best-effort tenant lookup for operators
    async fn fetch_company<T: Transport>(&self, api: &FleetApi<T>, user: &User) -> Option<Company> {
        if self.session.namespace() != Namespace::Operator || user.company_id.is_none() {
            return None;
        }
        match api.company_info().await {
            Ok(company) => Some(company),
            Err(e) => {
                warn!(error = %e, "Failed to load company info");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::MockTransport;
    use crate::client::Method;
    use crate::session::MemoryStore;
    use serde_json::json;

    fn user_json(role: &str, company: Option<&str>) -> serde_json::Value {
        json!({
            "id": "u1", "email": "ayse@rentacar.com", "full_name": "Ayse Yilmaz",
            "role": role, "company_id": company
        })
    }

    fn company_json() -> serde_json::Value {
        json!({"id": "c1", "name": "Bitlis Rent", "code": "BTL"})
    }

    #[tokio::test]
    async fn test_restore_without_token_is_anonymous() {
        let mock = MockTransport::new();
        let api = FleetApi::new(mock.clone());
        let mut auth = AuthService::operator(MemoryStore::new());

        assert!(auth.state().is_loading());
        auth.restore(&api).await;
        assert_eq!(auth.state(), &AuthState::Anonymous);
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_restore_with_valid_token() {
        let mock = MockTransport::new();
        mock.respond(Method::Get, "/api/auth/me", 200, user_json("firma_admin", Some("c1")));
        mock.respond(Method::Get, "/api/company/info", 200, company_json());
        let api = FleetApi::new(mock.clone());

        let store = MemoryStore::new();
        store.set("token", "stored").unwrap();
        let mut auth = AuthService::operator(&store);
        auth.restore(&api).await;

        assert_eq!(auth.state().role(), Some(Role::FirmaAdmin));
        assert_eq!(auth.state().company().unwrap().code, "BTL");
        assert_eq!(
            mock.requests_to(Method::Get, "/api/auth/me")[0].bearer.as_deref(),
            Some("stored")
        );
    }

    #[tokio::test]
    async fn test_restore_with_rejected_token_logs_out() {
        let mock = MockTransport::new();
        mock.fail(Method::Get, "/api/auth/me", 401, "Invalid token");
        let api = FleetApi::new(mock);

        let store = MemoryStore::new();
        store.set("token", "expired").unwrap();
        store.set("user", &user_json("operasyon", None).to_string()).unwrap();
        let mut auth = AuthService::operator(&store);
        auth.restore(&api).await;

        assert_eq!(auth.state(), &AuthState::Anonymous);
        assert!(store.is_empty());
        assert_eq!(api.token(), None);
    }

    #[tokio::test]
    async fn test_company_failure_is_not_fatal() {
        let mock = MockTransport::new();
        mock.respond(Method::Get, "/api/auth/me", 200, user_json("muhasebe", Some("c1")));
        mock.fail(Method::Get, "/api/company/info", 500, "boom");
        let api = FleetApi::new(mock);

        let store = MemoryStore::new();
        store.set("token", "t").unwrap();
        let mut auth = AuthService::operator(&store);
        auth.restore(&api).await;

        assert!(auth.state().is_authenticated());
        assert!(auth.state().company().is_none());
    }

    #[tokio::test]
    async fn test_login_stores_session_and_bearer() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Post,
            "/api/auth/login",
            200,
            json!({"access_token": "new-token", "token_type": "bearer", "user": user_json("personel", None)}),
        );
        let api = FleetApi::new(mock.clone());
        let store = MemoryStore::new();
        let mut auth = AuthService::operator(&store);

        let user = auth.login(&api, " ayse@rentacar.com ", "secret").await.unwrap();
        assert_eq!(user.role, Role::Personel);
        assert_eq!(store.get("token").as_deref(), Some("new-token"));
        assert!(store.get("user").is_some());
        assert_eq!(api.token().as_deref(), Some("new-token"));
        assert_eq!(
            mock.requests()[0].body,
            Some(json!({"email": "ayse@rentacar.com", "password": "secret"}))
        );
        // no company_id, no company lookup
        assert!(mock.requests_to(Method::Get, "/api/company/info").is_empty());
    }

    #[tokio::test]
    async fn test_login_failure_keeps_state() {
        let mock = MockTransport::new();
        mock.fail(Method::Post, "/api/auth/login", 401, "Invalid credentials");
        let api = FleetApi::new(mock.clone());
        let mut auth = AuthService::operator(MemoryStore::new());
        auth.restore(&api).await;

        let err = auth.login(&api, "a@b.com", "bad").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid credentials");
        assert_eq!(auth.state(), &AuthState::Anonymous);
        assert_eq!(api.token(), None);
    }

    #[tokio::test]
    async fn test_login_network_error_uses_fallback() {
        let mock = MockTransport::new();
        mock.network_error(Method::Post, "/api/auth/login");
        let api = FleetApi::new(mock);
        let mut auth = AuthService::operator(MemoryStore::new());

        let err = auth.login(&api, "a@b.com", "pw").await.unwrap_err();
        assert_eq!(err.to_string(), LOGIN_FAILED);
    }

    #[tokio::test]
    async fn test_logout_clears_store_and_bearer() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Post,
            "/api/auth/login",
            200,
            json!({"access_token": "t", "user": user_json("operasyon", None)}),
        );
        mock.respond(Method::Get, "/api/vehicles", 200, json!([]));
        let api = FleetApi::new(mock.clone());
        let store = MemoryStore::new();
        let mut auth = AuthService::operator(&store);
        auth.login(&api, "a@b.com", "pw").await.unwrap();

        auth.logout(&api);

        assert_eq!(auth.state(), &AuthState::Anonymous);
        assert!(store.get("token").is_none());
        assert!(store.get("user").is_none());
        api.vehicles(None).await.unwrap();
        assert_eq!(mock.requests().last().unwrap().bearer, None);
    }

    #[tokio::test]
    async fn test_customer_registration_creates_customer_record() {
        let mock = MockTransport::new();
        mock.respond(
            Method::Post,
            "/api/auth/register",
            200,
            json!({"access_token": "cust", "user": user_json("musteri", None)}),
        );
        mock.respond(
            Method::Post,
            "/api/customers",
            200,
            json!({"id": "k1", "tc_no": "12345678901", "full_name": "Ali Veli", "email": "ali@x.com", "phone": "0555"}),
        );
        let api = FleetApi::new(mock.clone());
        let store = MemoryStore::new();
        let mut auth = AuthService::customer(&store);

        let signup = CustomerSignup {
            full_name: "Ali Veli".into(),
            email: "ali@x.com".into(),
            phone: "0555".into(),
            tc_no: "12345678901".into(),
            password: "pw".into(),
        };
        auth.register_customer(&api, &signup).await.unwrap();

        let register = &mock.requests_to(Method::Post, "/api/auth/register")[0];
        assert_eq!(register.body.as_ref().unwrap()["role"], json!("musteri"));
        let create = &mock.requests_to(Method::Post, "/api/customers")[0];
        assert_eq!(create.bearer.as_deref(), Some("cust"));
        assert_eq!(store.get("customer_token").as_deref(), Some("cust"));
        assert!(store.get("token").is_none());
    }

    #[tokio::test]
    async fn test_customer_registration_rejects_bad_tc_no() {
        let mock = MockTransport::new();
        let api = FleetApi::new(mock.clone());
        let mut auth = AuthService::customer(MemoryStore::new());

        let signup = CustomerSignup {
            full_name: "Ali".into(),
            email: "ali@x.com".into(),
            phone: "0555".into(),
            tc_no: "123".into(),
            password: "pw".into(),
        };
        assert!(matches!(
            auth.register_customer(&api, &signup).await,
            Err(AuthError::Invalid(_))
        ));
        assert_eq!(mock.request_count(), 0);
    }
}
