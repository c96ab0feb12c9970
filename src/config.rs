//! Configuration System
//!
//! Settings for the static host and the CLI, read from a TOML file and
//! overridden by `FLEETEASE_*` environment variables.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub web: WebConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote FleetEase REST API
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_url")]
    pub base_url: String,

    #[serde(default = "default_api_timeout")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    "http://localhost:8001".to_string()
}

fn default_api_timeout() -> u64 {
    30
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_url(),
            timeout_secs: default_api_timeout(),
        }
    }
}

/// Static host serving the browser bundle
#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_dist_dir")]
    pub dist_dir: String,

    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_dist_dir() -> String {
    "./fleetease-ui/dist".to_string()
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dist_dir: default_dist_dir(),
            cors_origins: Vec::new(),
        }
    }
}

/// Where the CLI keeps its sign-in
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_session_file")]
    pub file: String,
}

fn default_session_file() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("fleetease").join("session.json"))
        .unwrap_or_else(|| PathBuf::from("./fleetease_session.json"))
        .to_string_lossy()
        .to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            file: default_session_file(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `pretty` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Defaults plus environment overrides
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("fleetease").join("config.toml")),
            Some(PathBuf::from("/etc/fleetease/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply `FLEETEASE_*` overrides; unparsable numbers are ignored
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(url) = var("FLEETEASE_API_URL") {
            self.api.base_url = url;
        }
        if let Some(secs) = var("FLEETEASE_API_TIMEOUT_SECS").and_then(|s| s.parse().ok()) {
            self.api.timeout_secs = secs;
        }

        if let Some(host) = var("FLEETEASE_WEB_HOST") {
            self.web.host = host;
        }
        if let Some(port) = var("FLEETEASE_WEB_PORT").and_then(|p| p.parse().ok()) {
            self.web.port = port;
        }
        if let Some(dir) = var("FLEETEASE_DIST_DIR") {
            self.web.dist_dir = dir;
        }

        if let Some(file) = var("FLEETEASE_SESSION_FILE") {
            self.session.file = file;
        }

        if let Some(level) = var("FLEETEASE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("FLEETEASE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# FleetEase Configuration
#
# Environment variables override these settings:
# - FLEETEASE_API_URL
# - FLEETEASE_API_TIMEOUT_SECS
# - FLEETEASE_WEB_HOST
# - FLEETEASE_WEB_PORT
# - FLEETEASE_DIST_DIR
# - FLEETEASE_SESSION_FILE
# - FLEETEASE_LOG_LEVEL
# - FLEETEASE_LOG_FORMAT

[api]
# FleetEase REST API the panel, the booking site and the CLI talk to
base_url = "http://localhost:8001"

# Request timeout in seconds
timeout_secs = 30

[web]
# Static host address
host = "0.0.0.0"
port = 3000

# Compiled browser bundle (trunk build output)
dist_dir = "./fleetease-ui/dist"

# Allowed CORS origins; empty allows any
cors_origins = []

[session]
# CLI sign-in storage
# file = "~/.local/share/fleetease/session.json"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api]\nbase_url = \"https://api.fleetease.test\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.api.base_url, "https://api.fleetease.test");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.web.port, 3000);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.api.base_url, default_api_url());
        assert!(config.web.cors_origins.is_empty());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("FLEETEASE_API_URL", "https://api.example.com"),
            ("FLEETEASE_WEB_PORT", "8080"),
            ("FLEETEASE_API_TIMEOUT_SECS", "soon"),
            ("FLEETEASE_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.api.base_url, "https://api.example.com");
        assert_eq!(config.web.port, 8080);
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_bad_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[web]\nport = \"eighty\"\n").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::Parse { .. })));
    }
}
