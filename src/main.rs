//! createsend: a minimal Campaign Monitor API client
//!
//! Entry point for the createsend command-line tool.

use clap::Parser;
use createsend::Client;
use createsend::config::{ApiCall, Cli, Command, ValidatedConfig, write_default_config};
use std::process::ExitCode;

mod app;
mod run;

use app::{Outcome, config_hint, init_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse();

    let outcome = if let Command::Init { output } = &cli.command {
        handle_init(output)
    } else {
        match ValidatedConfig::load(&cli) {
            Ok(config) => {
                init_tracing(config.verbose);
                tracing::debug!("{config}");
                config
                    .call
                    .as_ref()
                    .map_or(Outcome::Success, |call| run_application(&config, call))
            }
            Err(e) => {
                eprintln!("Configuration error: {e}");
                if let Some(hint) = config_hint(&e) {
                    eprintln!("\n{hint}");
                }
                Outcome::ConfigError
            }
        }
    };

    outcome.into()
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> Outcome {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            Outcome::Success
        }
        Err(e) => {
            eprintln!("Error: {e}");
            Outcome::ConfigError
        }
    }
}

/// Sends the requested API call and prints the response body if asked.
///
/// Excluded from coverage - requires async runtime and network.
#[cfg(not(tarpaulin_include))]
fn run_application(config: &ValidatedConfig, call: &ApiCall) -> Outcome {
    let client = match Client::from_config(&config.client) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to create API client: {e}");
            return Outcome::RequestFailed;
        }
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to create Tokio runtime: {e}");
            return Outcome::RequestFailed;
        }
    };

    match runtime.block_on(run::execute(&client, call)) {
        Ok(body) => {
            tracing::info!(method = %call.method, path = %call.path, "Request succeeded");
            if let Some(body) = body {
                let rendered = serde_json::to_string_pretty(&body).unwrap_or_else(|_| body.to_string());
                println!("{rendered}");
            }
            Outcome::Success
        }
        Err(e) => {
            tracing::error!("{e}");
            Outcome::RequestFailed
        }
    }
}
