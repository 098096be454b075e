//! Tests for configuration system

use planner::Config;
use planner_raster::Locale;
use temp_dir::TempDir;

#[test]
fn test_config_loads_from_default_toml() {
    let config = Config::load(Some("config/default.toml".to_string())).expect("Failed to load config");

    assert_eq!(config.raster.locale, Locale::En);
    assert_eq!(config.observability.log_level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_falls_back_to_defaults_without_file() {
    let config = Config::load(Some("config/missing.toml".to_string())).expect("Failed to load config");

    assert_eq!(config.raster.locale, Locale::En);
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn test_config_reads_locale_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("german.toml");
    std::fs::write(&path, "[raster]\nlocale = \"de\"\n").unwrap();

    let config = Config::load(Some(path.display().to_string())).expect("Failed to load config");

    assert_eq!(config.raster.locale, Locale::De);
}

#[test]
fn test_config_rejects_unknown_locale_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("french.toml");
    std::fs::write(&path, "[raster]\nlocale = \"fr\"\n").unwrap();

    assert!(Config::load(Some(path.display().to_string())).is_err());
}
