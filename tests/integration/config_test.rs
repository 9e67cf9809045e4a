//! Integration tests for configuration loading

use coin_ticker::config::Config;
use coin_ticker::telemetry::LogFormat;
use std::io::Write;

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
        [feed]
        base_url = "http://localhost:8080/api"
        limit = 10

        [telemetry]
        log_level = "warn"
        log_format = "json"
        "#
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.feed.base_url, "http://localhost:8080/api");
    assert_eq!(config.feed.limit.get(), 10);
    assert_eq!(config.feed.timeout_secs, 10);
    assert_eq!(config.telemetry.log_level, "warn");
    assert_eq!(config.telemetry.log_format, LogFormat::Json);
}

#[test]
fn test_load_invalid_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[feed]\nlimit = \"three\"").unwrap();

    assert!(Config::load(file.path()).is_err());
}
