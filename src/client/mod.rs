//! FleetEase REST API Client
//!
//! `FleetApi` owns the bearer token and turns typed calls into
//! [`ApiRequest`]s. The bytes go over a [`Transport`], which is reqwest on
//! native targets and `gloo-net` in the browser crate.
//!
//! Error bodies follow the server convention `{"detail": ...}` where
//! `detail` is either a message or a list of validation entries with a
//! `msg` field.

mod endpoints;
#[cfg(feature = "native")]
mod http;
#[cfg(test)]
pub(crate) mod mock;

#[cfg(feature = "native")]
pub use http::HttpTransport;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, PoisonError, RwLock};
use thiserror::Error;
use tracing::debug;

/// HTTP verbs used by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// One request, relative to the API base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path starting with `/api/`
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    /// Token for the `Authorization: Bearer` header
    pub bearer: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            bearer: None,
        }
    }

    /// Path plus percent-encoded query string
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query: Vec<String> = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect();
        format!("{}?{}", self.path, query.join("&"))
    }
}

/// Raw response as seen by the transport
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a request and returns whatever the server answered.
///
/// Implementations report only transport failures as errors; a 4xx/5xx
/// response is still `Ok`.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError>;
}

/// Errors returned by API calls
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Request never got a response
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-2xx status
    #[error("API error {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Api { status: u16, detail: Option<String> },

    /// Response body did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Request body could not be encoded
    #[error("Serialize error: {0}")]
    Serialize(String),
}

impl ClientError {
    /// Message to show the user: the server's detail when present, else `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Api {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Build from a failed response body
    pub fn from_response(response: &ApiResponse) -> Self {
        ClientError::Api {
            status: response.status,
            detail: parse_detail(&response.body),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Detail,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Detail {
    Message(String),
    Validation(Vec<ValidationEntry>),
}

#[derive(Deserialize)]
struct ValidationEntry {
    msg: String,
}

fn parse_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let detail = match parsed.detail {
        Detail::Message(message) => message,
        Detail::Validation(entries) => entries
            .into_iter()
            .map(|entry| entry.msg)
            .collect::<Vec<_>>()
            .join(", "),
    };
    if detail.trim().is_empty() {
        None
    } else {
        Some(detail)
    }
}

/// Typed client for the FleetEase API.
///
/// Clones share the token, so attaching it once after login is visible to
/// every page holding a copy.
#[derive(Clone)]
pub struct FleetApi<T> {
    transport: T,
    token: Arc<RwLock<Option<String>>>,
}

impl<T: Transport> FleetApi<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            token: Arc::new(RwLock::new(None)),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Attach `Authorization: Bearer <token>` to every following request
    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.into());
    }

    pub fn clear_token(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Send a request with the current bearer and map non-2xx to [`ClientError::Api`]
    pub async fn execute(&self, mut request: ApiRequest) -> Result<ApiResponse, ClientError> {
        request.bearer = self.token();
        let method = request.method;
        let target = request.path_and_query();
        debug!(method = method.as_str(), path = %target, "API request");

        let response = self.transport.send(request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            let error = ClientError::from_response(&response);
            debug!(method = method.as_str(), path = %target, status = response.status, "API request failed");
            Err(error)
        }
    }

    async fn call<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ClientError> {
        let response = self.execute(request).await?;
        decode(&response.body)
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ClientError> {
        self.call(ApiRequest::new(Method::Get, path)).await
    }

    pub async fn get_with<R: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<R, ClientError> {
        let mut request = ApiRequest::new(Method::Get, path);
        request.query = query;
        self.call(request).await
    }

    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ClientError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.call(with_body(Method::Post, path, body)?).await
    }

    pub async fn put<B, R>(&self, path: &str, body: &B) -> Result<R, ClientError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.call(with_body(Method::Put, path, body)?).await
    }

    /// PATCH carrying its arguments in the query string
    pub async fn patch_query<R: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<R, ClientError> {
        let mut request = ApiRequest::new(Method::Patch, path);
        request.query = query;
        self.call(request).await
    }

    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, ClientError> {
        self.call(ApiRequest::new(Method::Delete, path)).await
    }
}

fn with_body<B: Serialize + ?Sized>(
    method: Method,
    path: &str,
    body: &B,
) -> Result<ApiRequest, ClientError> {
    let mut request = ApiRequest::new(method, path);
    request.body =
        Some(serde_json::to_value(body).map_err(|e| ClientError::Serialize(e.to_string()))?);
    Ok(request)
}

fn decode<R: DeserializeOwned>(body: &str) -> Result<R, ClientError> {
    // An empty 2xx body decodes like JSON null, so `()` and `Option<_>` work
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ClientError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::mock::MockTransport;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detail_string() {
        let response = ApiResponse {
            status: 400,
            body: r#"{"detail":"Email already registered"}"#.into(),
        };
        let error = ClientError::from_response(&response);
        assert_eq!(error.user_message("fallback"), "Email already registered");
        assert_eq!(error.status(), Some(400));
    }

    #[test]
    fn test_detail_validation_list() {
        let response = ApiResponse {
            status: 422,
            body: r#"{"detail":[{"loc":["body","email"],"msg":"field required"},{"msg":"value is not a valid email"}]}"#.into(),
        };
        assert_eq!(
            ClientError::from_response(&response).user_message("x"),
            "field required, value is not a valid email"
        );
    }

    #[test]
    fn test_unparseable_body_uses_fallback() {
        let response = ApiResponse {
            status: 502,
            body: "<html>Bad gateway</html>".into(),
        };
        let error = ClientError::from_response(&response);
        assert_eq!(error.user_message("Something went wrong"), "Something went wrong");
        assert_eq!(
            ClientError::Network("refused".into()).user_message("offline"),
            "offline"
        );
    }

    #[test]
    fn test_query_encoding() {
        let mut request = ApiRequest::new(Method::Get, "/api/public/vehicles");
        request.query = vec![("segment".into(), "SUV & Jeep".into())];
        assert_eq!(
            request.path_and_query(),
            "/api/public/vehicles?segment=SUV%20%26%20Jeep"
        );
    }

    #[tokio::test]
    async fn test_bearer_follows_token() {
        let mock = MockTransport::new();
        mock.respond(Method::Get, "/api/auth/me", 200, json!({}));
        let api = FleetApi::new(mock.clone());

        let _: serde_json::Value = api.get("/api/auth/me").await.unwrap();
        api.set_token("abc");
        let _: serde_json::Value = api.get("/api/auth/me").await.unwrap();
        api.clone().clear_token();
        let _: serde_json::Value = api.get("/api/auth/me").await.unwrap();

        let bearers: Vec<_> = mock.requests().into_iter().map(|r| r.bearer).collect();
        assert_eq!(bearers, vec![None, Some("abc".to_string()), None]);
    }

    #[tokio::test]
    async fn test_empty_body_decodes_as_unit() {
        let mock = MockTransport::new();
        mock.respond_raw(Method::Delete, "/api/locations/l1", 204, "");
        let api = FleetApi::new(mock);
        let result: Result<(), _> = api.delete("/api/locations/l1").await;
        assert!(result.is_ok());
    }
}
