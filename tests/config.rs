use std::time::Duration;

use read_aloud::{Error, ReaderConfig};

#[test]
fn test_defaults() {
    let config = ReaderConfig::default();
    assert_eq!("ko", config.primary_locale);
    assert_eq!("en", config.fallback_locale);
    assert_eq!(Duration::from_secs(5), config.notice_timeout());
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = ReaderConfig::from_toml_str(
        r#"
        fallback_locale = "fr"
        notice_timeout_ms = 1500
        pitch = 1.5
        "#,
    )
    .unwrap();
    assert_eq!("ko", config.primary_locale);
    assert_eq!("fr", config.fallback_locale);
    assert_eq!(Duration::from_millis(1500), config.notice_timeout());
    assert_eq!(1.5, config.pitch);
    assert_eq!(1.0, config.rate);
}

#[test]
fn test_invalid_toml_is_a_config_error() {
    let err = ReaderConfig::from_toml_str("notice_timeout_ms = \"soon\"").unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_environment_overrides() {
    std::env::set_var("READ_ALOUD_LOCALE", "ja");
    std::env::set_var("READ_ALOUD_NOTICE_TIMEOUT_MS", "not a number");
    let config = ReaderConfig::from_env();
    std::env::remove_var("READ_ALOUD_LOCALE");
    std::env::remove_var("READ_ALOUD_NOTICE_TIMEOUT_MS");

    assert_eq!("ja", config.primary_locale);
    assert_eq!("en", config.fallback_locale);
    assert_eq!(5_000, config.notice_timeout_ms);
}
