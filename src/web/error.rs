use std::path::PathBuf;
use thiserror::Error;

/// Static host errors
#[derive(Error, Debug)]
pub enum WebError {
    /// No `index.html` in the configured dist directory
    #[error("No UI bundle in {0:?}; build fleetease-ui first")]
    MissingBundle(PathBuf),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Server(String),
}
