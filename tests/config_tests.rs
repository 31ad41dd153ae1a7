use savings_core::{
    config::{Config, ConfigManager},
    ledger::Period,
};
use tempfile::TempDir;

#[test]
fn missing_file_yields_defaults() {
    let temp = TempDir::new().unwrap();
    let manager = ConfigManager::with_base_dir(temp.path().join("home")).unwrap();
    let config = manager.load().unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.default_period, Period::Month);
    assert!(!manager.path().exists());
}

#[test]
fn save_then_load_keeps_preferences() {
    let temp = TempDir::new().unwrap();
    let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
    let mut config = Config::default();
    config.set("default_period", "year").unwrap();
    config.set("locale", "en-US").unwrap();
    manager.save(&config).unwrap();

    let loaded = manager.load().unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.money_formatter().format(1500.0), "€1,500.00");
    assert!(!manager.path().with_extension("json.tmp").exists());
}

#[test]
fn corrupt_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
    std::fs::write(manager.path(), "{ not json").unwrap();
    assert!(manager.load().is_err());
}
