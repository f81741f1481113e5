mod common;

use common::temp_file;
use mycity::config::{Config, ConfigError};
use mycity::navigation::NavigationTarget;
use std::path::Path;
use std::time::Duration;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.ui.tick_rate(), Duration::from_millis(250));
    assert!(config.ui.show_icons);
    assert_eq!(config.ui.start_route, "category_list");
    assert_eq!(config.catalog.path, None);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.log_path().ends_with("mycity/mycity.log"));
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_file_yields_defaults() {
    let config = Config::load_from(Path::new("/nonexistent/mycity/config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = temp_file(
        "config.toml",
        r#"
[ui]
show_icons = false
start_route = "category_detail/Parques"

[logging]
file = "/tmp/mycity-test.log"
"#,
    );
    let config = Config::load_from(&path).unwrap();

    assert!(!config.ui.show_icons);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.logging.level, "info");
    assert_eq!(
        config.logging.log_path(),
        Path::new("/tmp/mycity-test.log")
    );
    assert_eq!(
        config.start_target().unwrap().to_string(),
        "category_detail/Parques"
    );
}

#[test]
fn test_zero_tick_rate_is_rejected() {
    let (_dir, path) = temp_file("config.toml", "[ui]\ntick_rate_ms = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("tick_rate_ms"));
}

#[test]
fn test_invalid_start_route_is_rejected() {
    let (_dir, path) = temp_file("config.toml", "[ui]\nstart_route = \"item_detail/Parques/-1\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Invalid ui.start_route"));
}

#[test]
fn test_malformed_toml_is_a_parse_error() {
    let (_dir, path) = temp_file("config.toml", "[ui\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_catalog_path_is_read() {
    let (_dir, path) = temp_file("config.toml", "[catalog]\npath = \"/srv/catalog.toml\"\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(
        config.catalog.path.as_deref(),
        Some(Path::new("/srv/catalog.toml"))
    );
    assert_eq!(config.start_target().unwrap(), NavigationTarget::CategoryList);
}
