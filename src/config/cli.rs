//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::defaults;

/// createsend: a minimal Campaign Monitor API client
///
/// Sends a single request to the Campaign Monitor v3 API and reports
/// whether it succeeded.
#[derive(Debug, Parser)]
#[command(name = "createsend")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Base URL that request paths are resolved against
    #[arg(long = "base-url", global = true)]
    pub base_url: Option<String>,

    /// User-Agent header sent with every request
    #[arg(long = "user-agent", global = true)]
    pub user_agent: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for createsend
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Send one API request
    Request {
        /// API path relative to the base URL, without a leading slash (e.g. `clients.json`)
        path: String,

        /// HTTP method
        #[arg(long, short = 'X', default_value = defaults::METHOD)]
        method: String,

        /// JSON request body
        #[arg(long, short = 'd')]
        body: Option<String>,

        /// Print the JSON response body on success
        #[arg(long = "print-body")]
        print_body: bool,
    },

    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}
