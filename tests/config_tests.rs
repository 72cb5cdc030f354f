use chrono::Duration;
use rattendance::config::{Config, migrate};
use rattendance::errors::AppError;
use rattendance::models::locale::{Locale, LocaleCode};
use rattendance::models::session::SessionMode;
use std::fs;

mod common;
use common::{config_with, missing_config};

#[test]
fn test_missing_file_gives_defaults() {
    let (_dir, path) = missing_config("absent");
    let cfg = Config::load(&path).expect("load");

    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.target_work_duration, "8h");
    assert_eq!(cfg.locale, LocaleCode::Ko);
    assert_eq!(cfg.session_mode, SessionMode::Full);
    assert_eq!(cfg.location_timeout_secs, 10);
    assert!(cfg.location.is_none());
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = config_with("partial", "target_work_duration: 7h30m\nlocale: en\n");
    let cfg = Config::load(&path).expect("load");

    assert_eq!(cfg.locale, LocaleCode::En);
    assert_eq!(cfg.log_level, "warn");

    let settings = cfg.settings().expect("settings");
    assert_eq!(settings.target, Duration::minutes(450));
    assert_eq!(settings.locale, Locale::english());
}

#[test]
fn test_location_section_and_unbounded_timeout() {
    let yaml = "\
session_mode: simple
location_timeout_secs: 0
location:
  latitude: 37.5665
  longitude: 126.978
  city: 서울특별시
";
    let (_dir, path) = config_with("location", yaml);
    let cfg = Config::load(&path).expect("load");

    let loc = cfg.location.clone().expect("location section");
    assert!(loc.permission_granted);
    assert_eq!(loc.city.as_deref(), Some("서울특별시"));
    assert_eq!(loc.street, None);

    let settings = cfg.settings().expect("settings");
    assert_eq!(settings.mode, SessionMode::Simple);
    assert_eq!(settings.location_timeout, None);
}

#[test]
fn test_invalid_target_is_rejected() {
    let (_dir, path) = config_with("bad_target", "target_work_duration: forever\n");
    let cfg = Config::load(&path).expect("load");

    assert!(matches!(cfg.settings(), Err(AppError::InvalidDuration(_))));
}

#[test]
fn test_malformed_yaml_is_a_parse_error() {
    let (_dir, path) = config_with("broken", "locale: [ko\n");
    assert!(matches!(Config::load(&path), Err(AppError::ConfigParse(_))));
}

#[test]
fn test_save_then_load() {
    let (_dir, path) = missing_config("roundtrip");
    let cfg = Config {
        target_work_duration: "9h".into(),
        locale: LocaleCode::En,
        ..Config::default()
    };

    cfg.save(&path).expect("save");
    assert_eq!(Config::load(&path).expect("load"), cfg);
}

#[test]
fn test_init_all_in_test_mode_writes_nothing() {
    let (_dir, path) = missing_config("init_test");
    Config::init_all(&path, true).expect("init");
    assert!(!path.exists());
}

#[test]
fn test_missing_keys_and_migrate() {
    let (_dir, path) = config_with("old", "target_work_duration: 9h\nlocale: en\n");

    let missing = migrate::missing_keys(&path).expect("check");
    assert_eq!(
        missing,
        vec!["session_mode", "location_timeout_secs", "log_level"]
    );

    let added = migrate::fill_missing_keys(&path).expect("migrate");
    assert_eq!(added, missing);
    assert!(migrate::missing_keys(&path).expect("recheck").is_empty());

    // Existing values survive the rewrite.
    let cfg = Config::load(&path).expect("load");
    assert_eq!(cfg.target_work_duration, "9h");
    assert_eq!(cfg.locale, LocaleCode::En);

    let content = fs::read_to_string(&path).expect("read");
    assert!(content.contains("session_mode: full"));
}

#[test]
fn test_migrate_is_noop_when_complete() {
    let (_dir, path) = missing_config("complete");
    Config::default().save(&path).expect("save");
    let before = fs::read_to_string(&path).expect("read");

    assert!(migrate::fill_missing_keys(&path).expect("migrate").is_empty());
    assert_eq!(fs::read_to_string(&path).expect("read"), before);
}
