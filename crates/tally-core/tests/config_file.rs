use tally_core::config::{TallyConfig, ValidationPolicy, load_config_from, save_config_to};
use tempfile::TempDir;

#[test]
fn test_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let config = load_config_from(&config_path).expect("Should fall back to defaults");
    assert_eq!(config, TallyConfig::default());
}

#[test]
fn test_save_and_load_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("nested").join("config.toml");

    let mut config = TallyConfig::default();
    config.validation = ValidationPolicy::strict();
    config.ui.color = false;
    config.ui.prompt = "score> ".to_string();

    save_config_to(&config, &config_path).expect("Should save config");
    let loaded = load_config_from(&config_path).expect("Should load config");

    assert_eq!(loaded, config);
}

#[test]
fn test_malformed_file_is_serialization_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, "[validation\nreject_blank_names = yes").unwrap();

    let err = load_config_from(&config_path).unwrap_err();
    assert!(
        matches!(err, tally_core::TallyError::Serialization { ref format, .. } if format == "TOML"),
        "unexpected error: {err:?}"
    );
}
