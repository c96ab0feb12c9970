//! Host state shared by the handlers

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::Config;

#[derive(Debug, Clone)]
pub struct WebState {
    /// Trunk build output holding `index.html`
    pub dist_dir: PathBuf,
    /// API base handed to the browser through `/env.js`
    pub api_url: String,
    pub host: String,
    pub port: u16,
    /// Empty allows any origin
    pub cors_origins: Vec<String>,
    pub start_time: Instant,
}

impl WebState {
    pub fn new(dist_dir: impl AsRef<Path>, api_url: impl Into<String>) -> Self {
        Self {
            dist_dir: dist_dir.as_ref().to_path_buf(),
            api_url: api_url.into(),
            host: "127.0.0.1".to_string(),
            port: 3000,
            cors_origins: Vec::new(),
            start_time: Instant::now(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            host: config.web.host.clone(),
            port: config.web.port,
            cors_origins: config.web.cors_origins.clone(),
            ..Self::new(&config.web.dist_dir, config.api.base_url.clone())
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
