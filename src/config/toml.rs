//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::{ConfigError, defaults};

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// API endpoint configuration
    #[serde(default)]
    pub api: ApiSection,

    /// HTTP transport configuration
    #[serde(default)]
    pub http: HttpSection,
}

/// API endpoint configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiSection {
    /// Base URL request paths are resolved against
    pub base_url: Option<String>,

    /// User-Agent header value
    pub user_agent: Option<String>,
}

/// HTTP transport configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpSection {
    /// Request timeout in seconds
    pub timeout: Option<u64>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    format!(
        r#"# createsend configuration file

[api]
# Base URL that request paths are resolved against
# (default: {base_url})
# base_url = "{base_url}"

# User-Agent header sent with every request (default: {user_agent})
# user_agent = "my-integration/1.0"

[http]
# Request timeout in seconds
timeout = {timeout}
"#,
        base_url = defaults::BASE_URL,
        user_agent = defaults::USER_AGENT,
        timeout = defaults::TIMEOUT.as_secs(),
    )
}
