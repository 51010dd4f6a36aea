//! Tests for TOML configuration parsing.

use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_full_config() {
        let toml = r#"
            [api]
            base_url = "https://api.example.com/api/v3/"
            user_agent = "acme-sync/2.1"

            [http]
            timeout = 10
        "#;

        let config = TomlConfig::parse(toml).unwrap();

        assert_eq!(
            config.api.base_url.as_deref(),
            Some("https://api.example.com/api/v3/")
        );
        assert_eq!(config.api.user_agent.as_deref(), Some("acme-sync/2.1"));
        assert_eq!(config.http.timeout, Some(10));
    }

    #[test]
    fn empty_config_is_all_defaults() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.api.base_url.is_none());
        assert!(config.api.user_agent.is_none());
        assert!(config.http.timeout.is_none());
    }

    #[test]
    fn unknown_section_is_rejected() {
        let result = TomlConfig::parse("[retry]\nmax_attempts = 3\n");

        assert!(result.is_err());
    }

    #[test]
    fn unknown_field_is_rejected() {
        let result = TomlConfig::parse("[api]\napi_key = \"secret\"\n");

        assert!(result.is_err());
    }

    #[test]
    fn wrong_type_is_rejected() {
        let result = TomlConfig::parse("[http]\ntimeout = \"thirty\"\n");

        assert!(result.is_err());
    }
}

mod template {
    use super::*;

    #[test]
    fn default_template_parses() {
        let config = TomlConfig::parse(&default_config_template()).unwrap();

        assert_eq!(config.http.timeout, Some(30));
        assert!(config.api.base_url.is_none());
    }

    #[test]
    fn default_template_mentions_builtin_values() {
        let template = default_config_template();

        assert!(template.contains("https://api.createsend.com/api/v3/"));
        assert!(template.contains("createsend-go/0.0.1"));
    }
}
