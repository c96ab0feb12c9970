//! Static Host
//!
//! Serves the compiled browser bundle with Axum.
//!
//! # Endpoints
//!
//! - `GET /health` - Liveness and version
//! - `GET /env.js` - Runtime config for the bundle (`window.FLEETEASE_API_URL`)
//! - everything else - files from the dist directory, unknown paths fall
//!   back to `index.html` so client-side routes survive a reload

mod error;
mod routes;
mod state;

pub use error::WebError;
pub use state::WebState;

use axum::{http::HeaderValue, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Build the host router
pub fn build_router(state: WebState) -> Router {
    let index = state.dist_dir.join("index.html");
    let assets = ServeDir::new(&state.dist_dir).fallback(ServeFile::new(index));
    let cors = cors_layer(&state.cors_origins);

    Router::new()
        .route("/health", get(routes::health))
        .route("/env.js", get(routes::env_js))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(state))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();
    CorsLayer::new().allow_origin(AllowOrigin::list(allowed))
}

/// Start the static host
pub async fn serve(state: WebState) -> Result<(), WebError> {
    let index = state.dist_dir.join("index.html");
    if !index.is_file() {
        return Err(WebError::MissingBundle(state.dist_dir.clone()));
    }

    let addr = state.addr();
    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| WebError::Bind {
            addr: addr.clone(),
            source: e,
        })?;

    tracing::info!("FleetEase host listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| WebError::Server(e.to_string()))?;

    tracing::info!("FleetEase host shut down gracefully");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    fn create_test_app() -> (Router, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>fleetease</html>").unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log('app')").unwrap();

        let state = WebState::new(dir.path(), "https://api.fleetease.test");
        (build_router(state), dir)
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _dir) = create_test_app();
        let (status, _, body) = get(app, "/health").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_env_js_injects_api_url() {
        let (app, _dir) = create_test_app();
        let (status, content_type, body) = get(app, "/env.js").await;

        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().starts_with("application/javascript"));
        assert_eq!(
            body,
            "window.FLEETEASE_API_URL = \"https://api.fleetease.test\";\n"
        );
    }

    #[tokio::test]
    async fn test_static_file() {
        let (app, _dir) = create_test_app();
        let (status, _, body) = get(app, "/app.js").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log('app')");
    }

    #[tokio::test]
    async fn test_client_routes_fall_back_to_index() {
        let (app, _dir) = create_test_app();
        let (status, _, body) = get(app.clone(), "/admin/vehicles").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<html>fleetease</html>");

        let (status, _, body) = get(app, "/arac/v1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<html>fleetease</html>");
    }

    #[tokio::test]
    async fn test_serve_requires_bundle() {
        let dir = tempdir().unwrap();
        let state = WebState::new(dir.path(), "http://localhost:8001");
        assert!(matches!(
            serve(state).await,
            Err(WebError::MissingBundle(_))
        ));
    }
}
