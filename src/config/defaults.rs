//! Built-in values used when neither the command line nor the config file
//! sets an option.

pub use crate::api::{DEFAULT_BASE_URL as BASE_URL, DEFAULT_TIMEOUT as TIMEOUT, USER_AGENT};

/// Method for `createsend request` when `-X` is omitted.
pub const METHOD: &str = "GET";

/// Where `createsend init` writes the template.
pub const CONFIG_FILE: &str = "createsend.toml";
