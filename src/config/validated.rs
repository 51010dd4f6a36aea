//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use http::HeaderValue;
use url::Url;

use crate::api::ClientConfig;

use super::cli::{Cli, Command};
use super::defaults;
use super::error::ConfigError;
use super::toml::TomlConfig;

/// A single API call requested on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiCall {
    /// HTTP method, validated when the request is built
    pub method: String,
    /// Path relative to the base URL
    pub path: String,
    /// Parsed JSON body, if one was given
    pub body: Option<serde_json::Value>,
    /// Whether to decode and print the response body
    pub print_body: bool,
}

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Settings for the API client
    pub client: ClientConfig,

    /// The call to perform; `None` for the `init` command
    pub call: Option<ApiCall>,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ base_url: {}, user_agent: {}, timeout: {}s }}",
            self.client.base_url,
            self.client.user_agent,
            self.client.timeout.as_secs(),
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The base URL is not an absolute `http`/`https` URL
    /// - The user agent is empty or not a valid header value
    /// - The timeout is zero
    /// - The request body is not valid JSON
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let base_url = Self::resolve_base_url(cli, toml)?;
        let user_agent = Self::resolve_user_agent(cli, toml)?;
        let timeout = Self::resolve_timeout(cli, toml)?;
        let call = Self::resolve_call(&cli.command)?;

        Ok(Self {
            client: ClientConfig {
                base_url,
                user_agent,
                timeout,
            },
            call,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_base_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Url, ConfigError> {
        let url_str = cli
            .base_url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.api.base_url.as_deref()))
            .unwrap_or(defaults::BASE_URL);

        parse_base_url(url_str)
    }

    fn resolve_user_agent(cli: &Cli, toml: Option<&TomlConfig>) -> Result<String, ConfigError> {
        let value = cli
            .user_agent
            .as_deref()
            .or_else(|| toml.and_then(|t| t.api.user_agent.as_deref()))
            .unwrap_or(defaults::USER_AGENT);

        if value.trim().is_empty() {
            return Err(ConfigError::UserAgent {
                value: value.to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        HeaderValue::from_str(value).map_err(|e| ConfigError::UserAgent {
            value: value.to_string(),
            reason: e.to_string(),
        })?;

        Ok(value.to_string())
    }

    fn resolve_timeout(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
        match cli.timeout.or_else(|| toml.and_then(|t| t.http.timeout)) {
            Some(0) => Err(ConfigError::ZeroTimeout),
            Some(secs) => Ok(Duration::from_secs(secs)),
            None => Ok(defaults::TIMEOUT),
        }
    }

    fn resolve_call(command: &Command) -> Result<Option<ApiCall>, ConfigError> {
        let Command::Request {
            path,
            method,
            body,
            print_body,
        } = command
        else {
            return Ok(None);
        };

        let body = body
            .as_deref()
            .map(serde_json::from_str::<serde_json::Value>)
            .transpose()
            .map_err(ConfigError::Body)?;

        Ok(Some(ApiCall {
            method: method.clone(),
            path: path.clone(),
            body,
            print_body: *print_body,
        }))
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn parse_base_url(s: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(s).map_err(|e| ConfigError::BaseUrl {
        url: s.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::BaseUrl {
            url: s.to_string(),
            reason: "scheme must be http or https".to_string(),
        });
    }

    // Without a trailing slash, `clients.json` would replace the last segment.
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
