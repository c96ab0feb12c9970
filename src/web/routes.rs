//! Host handlers
//!
//! - GET /health - Liveness, version and uptime
//! - GET /env.js - Runtime configuration for the browser bundle

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use super::state::WebState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
}

/// GET /health
pub async fn health(State(state): State<Arc<WebState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.uptime_seconds(),
    })
}

/// GET /env.js
///
/// Loaded by `index.html` before the bundle, so one build can point at
/// any API.
pub async fn env_js(State(state): State<Arc<WebState>>) -> impl IntoResponse {
    // JSON string literal is a valid JS string literal
    let url = serde_json::Value::String(state.api_url.clone());
    (
        [
            (header::CONTENT_TYPE, "application/javascript; charset=utf-8"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        format!("window.FLEETEASE_API_URL = {};\n", url),
    )
}
