use ferrous_relay_domain::config::{CliOverrides, Config, ConfigError, DnsConfig};
use ferrous_relay_domain::ResponseMode;
use std::net::Ipv4Addr;
use std::time::Duration;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.server.dns_port, 2053);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.dns.upstream, None);
    assert_eq!(config.dns.query_timeout, 2000);
    assert_eq!(config.dns.placeholder_address, Ipv4Addr::new(8, 8, 8, 8));
    assert_eq!(config.dns.answer_ttl, 60);
    assert!(!config.dns.answer_unsupported_opcodes);
    assert_eq!(config.logging.level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_default_mode_is_standalone() {
    assert_eq!(
        DnsConfig::default().response_mode().unwrap(),
        ResponseMode::Standalone
    );
}

#[test]
fn test_parse_full_toml() {
    let config = Config::from_toml(
        r#"
        [server]
        bind_address = "127.0.0.1"
        dns_port = 5353

        [dns]
        upstream = "1.1.1.1:53"
        query_timeout = 500
        placeholder_address = "10.0.0.1"
        answer_ttl = 120
        answer_unsupported_opcodes = true

        [logging]
        level = "debug"
        "#,
    )
    .unwrap();

    assert_eq!(config.server.listen_address(), "127.0.0.1:5353");
    assert_eq!(
        config.dns.response_mode().unwrap(),
        ResponseMode::Forward("1.1.1.1:53".parse().unwrap())
    );
    assert_eq!(config.dns.query_timeout(), Duration::from_millis(500));

    let policy = config.dns.response_policy();
    assert_eq!(policy.placeholder_address, Ipv4Addr::new(10, 0, 0, 1));
    assert_eq!(policy.answer_ttl, 120);
    assert!(policy.answer_unsupported_opcodes);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_partial_toml_uses_defaults() {
    let config = Config::from_toml("[dns]\nanswer_ttl = 30\n").unwrap();

    assert_eq!(config.dns.answer_ttl, 30);
    assert_eq!(config.dns.query_timeout, 2000);
    assert_eq!(config.server.dns_port, 2053);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    assert!(matches!(
        Config::from_toml("[server]\ndns_port = \"abc\"\n"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_cli_overrides_win() {
    let mut config = Config::default();
    config.apply_cli_overrides(CliOverrides {
        dns_port: Some(53),
        bind_address: Some("::".to_string()),
        resolver: Some("9.9.9.9:53".to_string()),
        log_level: Some("trace".to_string()),
    });

    assert_eq!(config.server.dns_port, 53);
    assert_eq!(config.server.listen_address(), "[::]:53");
    assert_eq!(config.dns.upstream.as_deref(), Some("9.9.9.9:53"));
    assert_eq!(config.logging.level, "trace");
}

#[test]
fn test_validate_rejects_bad_upstream() {
    let mut config = Config::default();
    config.dns.upstream = Some("not-an-address".to_string());

    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_rejects_zero_port_and_timeout() {
    let mut config = Config::default();
    config.server.dns_port = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.dns.query_timeout = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_load_rejects_bad_resolver_override() {
    let overrides = CliOverrides {
        resolver: Some("not-an-address".to_string()),
        ..CliOverrides::default()
    };
    let path = std::env::temp_dir().join("ferrous-relay-load-test.toml");
    std::fs::write(&path, "[server]\ndns_port = 2053\n").unwrap();

    let result = Config::load(path.to_str(), overrides);

    assert!(matches!(result, Err(ConfigError::Validation(_))));
    let _ = std::fs::remove_file(&path);
}
