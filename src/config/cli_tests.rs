//! Tests for CLI argument parsing.

use std::path::PathBuf;

use clap::Parser;

use super::cli::{Cli, Command};

mod parsing {
    use super::*;

    #[test]
    fn request_defaults_to_get() {
        let cli = Cli::parse_from(["createsend", "request", "clients.json"]);

        match cli.command {
            Command::Request {
                path,
                method,
                body,
                print_body,
            } => {
                assert_eq!(path, "clients.json");
                assert_eq!(method, "GET");
                assert!(body.is_none());
                assert!(!print_body);
            }
            Command::Init { .. } => panic!("expected request command"),
        }
    }

    #[test]
    fn request_with_method_and_body() {
        let cli = Cli::parse_from([
            "createsend",
            "request",
            "-X",
            "POST",
            "--body",
            r#"{"CompanyName":"Acme"}"#,
            "--print-body",
            "clients.json",
        ]);

        let Command::Request {
            method,
            body,
            print_body,
            ..
        } = cli.command
        else {
            panic!("expected request command");
        };
        assert_eq!(method, "POST");
        assert_eq!(body.as_deref(), Some(r#"{"CompanyName":"Acme"}"#));
        assert!(print_body);
    }

    #[test]
    fn global_options_after_subcommand() {
        let cli = Cli::parse_from([
            "createsend",
            "request",
            "clients.json",
            "--base-url",
            "http://localhost:8080/api/v3/",
            "--user-agent",
            "acme/1.0",
            "--timeout",
            "5",
            "-v",
        ]);

        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:8080/api/v3/"));
        assert_eq!(cli.user_agent.as_deref(), Some("acme/1.0"));
        assert_eq!(cli.timeout, Some(5));
        assert!(cli.verbose);
    }

    #[test]
    fn config_short_flag() {
        let cli = Cli::parse_from(["createsend", "-c", "cs.toml", "request", "clients.json"]);

        assert_eq!(cli.config, Some(PathBuf::from("cs.toml")));
    }

    #[test]
    fn init_uses_default_output() {
        let cli = Cli::parse_from(["createsend", "init"]);

        assert!(matches!(
            cli.command,
            Command::Init { ref output } if output == &PathBuf::from("createsend.toml")
        ));
    }

    #[test]
    fn init_with_custom_output() {
        let cli = Cli::parse_from(["createsend", "init", "-o", "custom.toml"]);

        assert!(matches!(
            cli.command,
            Command::Init { ref output } if output == &PathBuf::from("custom.toml")
        ));
    }

    #[test]
    fn missing_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["createsend"]).is_err());
    }

    #[test]
    fn request_without_path_is_rejected() {
        assert!(Cli::try_parse_from(["createsend", "request"]).is_err());
    }

    #[test]
    fn non_numeric_timeout_is_rejected() {
        let result = Cli::try_parse_from(["createsend", "--timeout", "soon", "init"]);

        assert!(result.is_err());
    }
}
