use datewalk::config::Config;
use datewalk::constants::DEFAULT_ZONE;
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("datewalk-config-{}-{}", std::process::id(), name))
}

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.display.zone, "UTC");
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Unknown zone should fail
    config.display.zone = "Atlantis/Capital".to_string();
    assert!(config.validate().is_err());

    // Reset and test invalid log level
    config.display.zone = "Europe/Paris".to_string();
    assert!(config.validate().is_ok());
    config.logging.level = "chatty".to_string();
    assert!(config.validate().is_err());

    // Reset and test empty log file path
    config.logging.level = "debug".to_string();
    config.logging.file = Some(PathBuf::new());
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("zone = \"UTC\""));
    assert!(toml_str.contains("enabled = false"));
    assert!(toml_str.contains("level = \"info\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert!(config.logging.enabled);
    assert_eq!(config.logging.level, "info"); // default value
    assert_eq!(config.display.zone, DEFAULT_ZONE); // default value
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.display.zone, default_config.display.zone);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
    assert_eq!(config.logging.level, default_config.logging.level);
}

#[test]
fn test_load_from_file() {
    let path = temp_path("load.toml");
    std::fs::write(
        &path,
        r#"
[display]
zone = "Asia/Tokyo"

[logging]
level = "warn"
"#,
    )
    .unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.display.zone, "Asia/Tokyo");
    assert_eq!(config.logging.level_filter().unwrap(), log::LevelFilter::Warn);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    let path = temp_path("invalid.toml");
    std::fs::write(&path, "[display]\nzone = \"Moon/Base\"\n").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Moon/Base"));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_load_from_missing_file() {
    let err = Config::load_from_file(temp_path("missing.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_invalid_file_falls_back_to_defaults() {
    let path = temp_path("fallback-zone.toml");
    std::fs::write(&path, "[display]\nzone = \"Moon/Base\"\n").unwrap();

    let config = Config::load_from_file_or_default(&path);
    assert_eq!(config.display.zone, DEFAULT_ZONE);
    assert!(!config.logging.enabled);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_malformed_file_falls_back_to_defaults() {
    let path = temp_path("fallback-syntax.toml");
    std::fs::write(&path, "garbage = = \n").unwrap();

    assert!(Config::load_from_file(&path).is_err());
    let config = Config::load_from_file_or_default(&path);
    assert_eq!(config.display.zone, DEFAULT_ZONE);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_valid_file_is_used_by_fallback_loader() {
    let path = temp_path("fallback-valid.toml");
    std::fs::write(&path, "[display]\nzone = \"Asia/Tokyo\"\n").unwrap();

    assert_eq!(Config::load_from_file_or_default(&path).display.zone, "Asia/Tokyo");

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_generate_default_config() {
    let dir = temp_path("generated");
    let path = dir.join("config.toml");

    Config::generate_default_config(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# datewalk Configuration File"));

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded.display.zone, "UTC");
    assert!(!loaded.logging.enabled);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_default_config_path() {
    if let Ok(path) = Config::get_default_config_path() {
        assert!(path.ends_with("datewalk/config.toml"));
    }
}
