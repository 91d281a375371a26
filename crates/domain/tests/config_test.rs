use sensor_stats_domain::config::ConfigError;
use sensor_stats_domain::{CliOverrides, Config};

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.database.path, "./sensor-stats.db");
    assert_eq!(config.database.max_connections, 5);
    assert_eq!(config.database.query_timeout_secs, 10);
    assert!(config.cache.enabled);
    assert_eq!(config.cache.max_entries, 10_000);
    assert_eq!(config.cache.ttl_secs, 0);
    assert!((config.cache.batch_eviction_percentage - 0.1).abs() < f64::EPSILON);
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_partial_toml_keeps_defaults() {
    let config = Config::from_toml(
        r#"
        [cache]
        max_entries = 500
        ttl_secs = 3600
        "#,
    )
    .unwrap();

    assert_eq!(config.cache.max_entries, 500);
    assert_eq!(config.cache.ttl_secs, 3600);
    assert!(config.cache.enabled);
    assert_eq!(config.database.max_connections, 5);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_full_toml() {
    let config = Config::from_toml(
        r#"
        [database]
        path = "/var/lib/sensor-stats/data.db"
        max_connections = 8
        query_timeout_secs = 30

        [cache]
        enabled = false
        batch_eviction_percentage = 0.25

        [logging]
        level = "debug"
        json = true
        "#,
    )
    .unwrap();

    assert_eq!(config.database.path, "/var/lib/sensor-stats/data.db");
    assert_eq!(config.database.max_connections, 8);
    assert_eq!(config.database.query_timeout_secs, 30);
    assert!(!config.cache.enabled);
    assert_eq!(config.cache.batch_eviction_percentage, 0.25);
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json);
}

#[test]
fn test_config_invalid_toml() {
    let result = Config::from_toml("[cache]\nmax_entries = \"many\"");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_config_validate_rejects_zero_entries() {
    let mut config = Config::default();
    config.cache.max_entries = 0;
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_config_validate_rejects_zero_connections() {
    let mut config = Config::default();
    config.database.max_connections = 0;
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_config_validate_batch_percentage_range() {
    let mut config = Config::default();

    for pct in [0.0, -0.5, 1.5, f64::NAN] {
        config.cache.batch_eviction_percentage = pct;
        assert!(
            matches!(config.validate(), Err(ConfigError::Validation(_))),
            "expected {} to be rejected",
            pct
        );
    }

    config.cache.batch_eviction_percentage = 1.0;
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_load_from_file_with_overrides() {
    let path = std::env::temp_dir().join(format!("sensor-stats-test-{}.toml", std::process::id()));
    std::fs::write(&path, "[logging]\nlevel = \"warn\"\n\n[database]\npath = \"from-file.db\"\n")
        .unwrap();

    let config = Config::load(
        path.to_str(),
        CliOverrides {
            database_path: Some("override.db".to_string()),
            log_level: None,
        },
    )
    .unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.database.path, "override.db");
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_config_load_missing_file() {
    let result = Config::load(
        Some("/nonexistent/sensor-stats.toml"),
        CliOverrides::default(),
    );
    assert!(matches!(result, Err(ConfigError::FileRead(_, _))));
}
