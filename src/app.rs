//! Process-level plumbing for the binary: exit statuses, config hints and
//! log output.

use std::process::ExitCode;

use createsend::config::ConfigError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// How a run of the binary ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// Bad arguments or config file; exits 1.
    ConfigError,
    /// The request was sent but failed, or never got a response; exits 2.
    RequestFailed,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => Self::SUCCESS,
            Outcome::ConfigError => Self::FAILURE,
            Outcome::RequestFailed => Self::from(2),
        }
    }
}

/// Follow-up advice printed under a configuration error, if any applies.
pub const fn config_hint(error: &ConfigError) -> Option<&'static str> {
    match error {
        ConfigError::Read { .. } | ConfigError::Parse(_) => {
            Some("Run 'createsend init' to generate a configuration template.")
        }
        ConfigError::Body(_) => {
            Some("The --body value must be a JSON document, e.g. '{\"Name\":\"Acme\"}'.")
        }
        ConfigError::ZeroTimeout => Some("Omit --timeout to use the default."),
        _ => None,
    }
}

/// Sends log output to stderr so stdout carries only response bodies.
///
/// `RUST_LOG` overrides the level picked by `verbose`.
pub fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcomes_map_to_distinct_exit_codes() {
        assert_eq!(ExitCode::from(Outcome::Success), ExitCode::SUCCESS);
        assert_eq!(ExitCode::from(Outcome::ConfigError), ExitCode::FAILURE);
        assert_eq!(ExitCode::from(Outcome::RequestFailed), ExitCode::from(2));
    }

    #[test]
    fn unreadable_file_suggests_init() {
        let error = ConfigError::Read {
            path: "absent.toml".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };

        assert!(config_hint(&error).is_some_and(|hint| hint.contains("createsend init")));
    }

    #[test]
    fn bad_base_url_has_no_hint() {
        let error = ConfigError::BaseUrl {
            url: "api/v3".to_string(),
            reason: "relative URL without a base".to_string(),
        };

        assert!(config_hint(&error).is_none());
    }
}
