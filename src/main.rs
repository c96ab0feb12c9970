//! FleetEase static host
//!
//! Serves the compiled `fleetease-ui` bundle and tells it where the API
//! lives. Run with: `cargo run --bin fleetease`
//!
//! Reads the usual config file; `FLEETEASE_WEB_PORT`, `FLEETEASE_DIST_DIR`
//! and `FLEETEASE_API_URL` are the overrides most deployments need.

use anyhow::Context;
use fleetease::config::{Config, LoggingConfig};
use fleetease::web::{serve, WebState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    init_tracing(&config.logging);

    tracing::info!("Starting FleetEase host v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Bundle directory: {}", config.web.dist_dir);
    tracing::info!("API base: {}", config.api.base_url);

    serve(WebState::from_config(&config))
        .await
        .context("FleetEase host stopped with an error")?;

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("fleetease={},tower_http=debug", logging.level))
    });
    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
