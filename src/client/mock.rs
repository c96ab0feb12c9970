//! In-memory transport for tests
//!
//! Responses are queued per `(method, path)`. Each call serves the oldest
//! response not yet superseded: once served, a response is dropped as soon
//! as a newer one is queued behind it, and the newest one keeps answering.
//! Unregistered routes answer 404.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use super::{ApiRequest, ApiResponse, ClientError, Method, Transport};

#[derive(Clone, Default)]
pub(crate) struct MockTransport {
    inner: Arc<Mutex<Inner>>,
}

struct Slot {
    served: bool,
    response: Result<ApiResponse, ClientError>,
}

#[derive(Default)]
struct Inner {
    routes: HashMap<(Method, String), VecDeque<Slot>>,
    requests: Vec<ApiRequest>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(&self, method: Method, path: &str, status: u16, body: serde_json::Value) {
        self.respond_raw(method, path, status, &body.to_string());
    }

    pub(crate) fn respond_raw(&self, method: Method, path: &str, status: u16, body: &str) {
        self.push(
            method,
            path,
            Ok(ApiResponse {
                status,
                body: body.to_string(),
            }),
        );
    }

    pub(crate) fn fail(&self, method: Method, path: &str, status: u16, detail: &str) {
        self.respond(method, path, status, serde_json::json!({ "detail": detail }));
    }

    pub(crate) fn network_error(&self, method: Method, path: &str) {
        self.push(
            method,
            path,
            Err(ClientError::Network("connection refused".to_string())),
        );
    }

    fn push(&self, method: Method, path: &str, response: Result<ApiResponse, ClientError>) {
        let mut inner = self.inner.lock().unwrap();
        inner
            .routes
            .entry((method, path.to_string()))
            .or_default()
            .push_back(Slot {
                served: false,
                response,
            });
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub(crate) fn requests_to(&self, method: Method, path: &str) -> Vec<ApiRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.inner.lock().unwrap().requests.len()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let mut inner = self.inner.lock().unwrap();
        let key = (request.method, request.path.clone());
        inner.requests.push(request);

        let Some(queue) = inner.routes.get_mut(&key) else {
            return Ok(ApiResponse {
                status: 404,
                body: r#"{"detail":"Not Found"}"#.to_string(),
            });
        };
        while queue.len() > 1 && queue[0].served {
            queue.pop_front();
        }
        let slot = queue.front_mut().unwrap();
        slot.served = true;
        slot.response.clone()
    }
}
