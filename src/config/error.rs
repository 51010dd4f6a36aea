//! Errors raised while assembling a [`ValidatedConfig`](super::ValidatedConfig).

use std::path::PathBuf;

use thiserror::Error;

/// Why the command line and config file could not be turned into a client
/// configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// `base_url` is not an absolute `http`/`https` URL.
    #[error("base URL '{url}' rejected: {reason}")]
    BaseUrl { url: String, reason: String },

    /// `user_agent` is empty or cannot be sent as a header.
    #[error("user agent '{value}' rejected: {reason}")]
    UserAgent { value: String, reason: String },

    #[error("timeout must be at least one second")]
    ZeroTimeout,

    /// `--body` is not a JSON document.
    #[error("request body is not JSON: {0}")]
    Body(#[source] serde_json::Error),
}
