//! Configuration loading from files and the environment

use payroll::config::{AppConfig, StorageConfig};
use payroll::core::error::ConfigError;
use std::collections::HashMap;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();
    file
}

fn env_of(pairs: Vec<(&str, String)>) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_load_from_named_file() {
    let file = write_config(
        "server:\n  bind: 0.0.0.0:9090\n  public_url: https://payroll.example/\n",
    );

    let config = AppConfig::load_with(env_of(vec![(
        "PAYROLL_CONFIG",
        file.path().display().to_string(),
    )]))
    .unwrap();

    assert_eq!(config.server.bind, "0.0.0.0:9090");
    assert_eq!(config.server.public_url, "https://payroll.example/");
    assert_eq!(config.storage, StorageConfig::Memory);
    assert_eq!(config.bind_addr().unwrap().port(), 9090);
}

#[test]
fn test_env_overrides_file() {
    let file = write_config("server:\n  bind: 0.0.0.0:9090\n");

    let config = AppConfig::load_with(env_of(vec![
        ("PAYROLL_CONFIG", file.path().display().to_string()),
        ("PAYROLL_BIND", "127.0.0.1:7000".to_string()),
    ]))
    .unwrap();

    assert_eq!(config.server.bind, "127.0.0.1:7000");
}

#[test]
fn test_malformed_file_reports_path() {
    let file = write_config("server: [not, a, map\n");
    let path = file.path().display().to_string();

    let err = AppConfig::from_yaml_file(file.path()).unwrap_err();

    match err {
        ConfigError::ParseError { file, .. } => assert_eq!(file, Some(path)),
        other => panic!("expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_invalid_bind_in_file_is_rejected() {
    let file = write_config("server:\n  bind: localhost\n");

    let err = AppConfig::load_with(env_of(vec![(
        "PAYROLL_CONFIG",
        file.path().display().to_string(),
    )]))
    .unwrap_err();

    assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "server.bind"));
}

#[cfg(feature = "postgres")]
#[test]
fn test_database_url_selects_postgres() {
    let file = write_config("{}\n");

    let config = AppConfig::load_with(env_of(vec![
        ("PAYROLL_CONFIG", file.path().display().to_string()),
        ("DATABASE_URL", "postgres://db/payroll".to_string()),
    ]))
    .unwrap();

    assert!(matches!(config.storage, StorageConfig::Postgres { .. }));
}

#[cfg(not(feature = "postgres"))]
#[test]
fn test_database_url_without_feature_is_rejected() {
    let file = write_config("{}\n");

    let err = AppConfig::load_with(env_of(vec![
        ("PAYROLL_CONFIG", file.path().display().to_string()),
        ("DATABASE_URL", "postgres://db/payroll".to_string()),
    ]))
    .unwrap_err();

    assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "storage.backend"));
}
