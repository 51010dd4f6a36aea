//! Configuration layer for the createsend command-line tool.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`], [`ApiCall`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - `--base-url`, `--user-agent`, `--timeout`
//! 2. **TOML config file** - `[api]` and `[http]` sections
//! 3. **Built-in defaults** - the public API root, the library user agent, 30s timeout
//!
//! A base URL without a trailing slash gets one appended, so that request
//! paths extend it rather than replacing its last segment.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod cli_tests;
#[cfg(test)]
mod toml_tests;

pub use cli::{Cli, Command};
pub use error::ConfigError;
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ApiCall, ValidatedConfig, write_default_config};
