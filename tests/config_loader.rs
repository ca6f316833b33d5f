use std::fs;

use pixelrover::config::{Config, ConfigError, API_KEY_ENV};
use tempfile::TempDir;

#[test]
fn default_values() {
    let config = Config::default();
    assert_eq!(config.api.endpoint, "https://pixabay.com/api/");
    assert!(config.api.key.is_none());
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert_eq!(config.api.image_type, "photo");
    assert_eq!(config.api.orientation, "horizontal");
    assert!(config.api.safesearch);
    assert_eq!(config.search.per_page, 40);
    assert_eq!(config.ui.tick_ms, 250);
    assert_eq!(config.ui.scroll_threshold_rows, 3);
    assert_eq!(config.ui.notice_ttl_ms, 3000);
}

#[test]
fn config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("pixelrover/config.toml"));
}

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
    assert_eq!(config.search.per_page, 40);
}

#[test]
fn parses_a_full_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[api]
endpoint = "http://127.0.0.1:9/"
key = "abc123"
connect_timeout_seconds = 2
safesearch = false

[search]
per_page = 20

[ui]
tick_ms = 100
scroll_threshold_rows = 5
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.endpoint, "http://127.0.0.1:9/");
    assert_eq!(config.api.key.as_deref(), Some("abc123"));
    assert_eq!(config.api.connect_timeout_seconds, 2);
    assert!(!config.api.safesearch);
    assert_eq!(config.search.per_page, 20);
    assert_eq!(config.ui.tick_ms, 100);
    assert_eq!(config.ui.scroll_threshold_rows, 5);
    // Untouched sections keep their defaults.
    assert_eq!(config.api.orientation, "horizontal");
    assert_eq!(config.ui.notice_ttl_ms, 3000);
}

#[test]
fn per_page_out_of_bounds_fails_validation() {
    for per_page in [0u32, 2, 201] {
        let mut config = Config::default();
        config.search.per_page = per_page;
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::ValidationError { .. }),
            "per_page {} must be rejected",
            per_page
        );
    }
}

#[test]
fn unparseable_file_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "this is [not toml").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

/// Env precedence and fallback in one test: the variable is process-wide,
/// so splitting this across tests would race under parallel execution.
#[test]
fn api_key_prefers_env_over_config() {
    let mut config = Config::default();
    config.api.key = Some("from-config".to_string());

    std::env::set_var(API_KEY_ENV, "from-env");
    assert_eq!(config.api_key().as_deref(), Some("from-env"));

    std::env::set_var(API_KEY_ENV, "   ");
    assert_eq!(
        config.api_key().as_deref(),
        Some("from-config"),
        "blank env value falls through to the config file"
    );

    std::env::remove_var(API_KEY_ENV);
    assert_eq!(config.api_key().as_deref(), Some("from-config"));

    config.api.key = None;
    assert_eq!(config.api_key(), None);
}
