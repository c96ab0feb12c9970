//! HTTP Transport
//!
//! Sends `fleetease` API requests with `gloo-net` and resolves the API
//! base URL at runtime.

use async_trait::async_trait;
use fleetease::{ApiRequest, ApiResponse, ClientError, FleetApi, Method, Transport};
use gloo_net::http::{Request, RequestBuilder};
use wasm_bindgen::JsValue;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8001";

/// `localStorage` key that overrides the API base
const API_URL_KEY: &str = "fleetease_api_url";

/// Global set by the host's `/env.js`
const API_URL_GLOBAL: &str = "FLEETEASE_API_URL";

pub type BrowserApi = FleetApi<BrowserTransport>;

/// Resolve the API base: `window.FLEETEASE_API_URL`, then
/// `localStorage`, then [`DEFAULT_API_BASE`]
pub fn get_api_base() -> String {
    let injected = web_sys::window().and_then(|window| {
        js_sys::Reflect::get(&window, &JsValue::from_str(API_URL_GLOBAL))
            .ok()
            .and_then(|value| value.as_string())
    });
    let stored = || {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
    };
    normalize_base(injected.or_else(stored).as_deref())
}

fn normalize_base(url: Option<&str>) -> String {
    url.map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
        .to_string()
}

/// `gloo-net` implementation of the API transport
#[derive(Debug, Clone)]
pub struct BrowserTransport {
    base_url: String,
}

impl BrowserTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base(Some(base_url)),
        }
    }

    fn builder(&self, request: &ApiRequest) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, request.path_and_query());
        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Patch => Request::patch(&url),
            Method::Delete => Request::delete(&url),
        };
        match &request.bearer {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }
}

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let builder = self.builder(&request);
        let prepared = match &request.body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ClientError::Serialize(e.to_string()))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base(None), DEFAULT_API_BASE);
        assert_eq!(normalize_base(Some("  ")), DEFAULT_API_BASE);
        assert_eq!(
            normalize_base(Some("https://api.fleetease.test/")),
            "https://api.fleetease.test"
        );
    }

    #[test]
    fn test_transport_trims_base() {
        let transport = BrowserTransport::new("https://api.fleetease.test/");
        assert_eq!(transport.base_url, "https://api.fleetease.test");
    }
}
