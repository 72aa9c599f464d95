//! Configuration tests
//!
//! These tests serve as guards to ensure all config fields are properly
//! serialized. When you add a new field, these tests will fail until you
//! update to_toml() and FileConfig together.

use super::*;

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

/// Verify that serialized config can be parsed back.
/// This catches TOML syntax errors in the template.
#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    // Should parse without error
    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );
}

/// Verify that non-default values survive a round-trip through the template.
#[test]
fn test_config_roundtrip_with_custom_values() {
    let mut config = Config::default();
    config.theme = "nord".to_string();
    config.locale = "de".to_string();
    config.start_route = Some("system-admin".to_string());
    config.tick_ms = 100;
    config.logging.level = "debug".to_string();
    config.logging.file_enabled = true;
    config.session.enabled = false;

    let toml_str = config.to_toml();
    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Custom config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let file_config = parsed.unwrap();
    assert_eq!(file_config.theme, Some("nord".to_string()));
    assert_eq!(file_config.locale, Some("de".to_string()));
    assert_eq!(file_config.start_route, Some("system-admin".to_string()));
    assert_eq!(file_config.tick_ms, Some(100));

    let logging = file_config.logging.expect("logging section should be present");
    assert_eq!(logging.level, Some("debug".to_string()));
    assert_eq!(logging.file_enabled, Some(true));

    let session = file_config.session.expect("session section should be present");
    assert_eq!(session.enabled, Some(false));
}

/// The default template must not pin a start route; an unset value is a
/// commented example, so parsing it back yields None.
#[test]
fn test_default_template_comments_out_start_route() {
    let toml_str = Config::default().to_toml();
    assert!(
        toml_str.contains("# start_route"),
        "Unset start_route should appear as a commented example.\nTOML:\n{}",
        toml_str
    );

    let parsed: FileConfig = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed.start_route, None);
}

// ─────────────────────────────────────────────────────────────────────────────
// Save tests
// ─────────────────────────────────────────────────────────────────────────────

/// save() must honor the configured path so callers (and tests) can redirect
/// persistence away from the user's real config file.
#[test]
fn test_save_writes_to_the_configured_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.theme = "gruvbox".to_string();
    config.path = Some(path.clone());
    config.save().unwrap();

    let saved = std::fs::read_to_string(&path).unwrap();
    assert!(saved.contains("theme = \"gruvbox\""));
}

#[test]
fn test_save_without_a_path_is_an_error() {
    let mut config = Config::default();
    config.path = None;

    let err = config.save().unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}

// ─────────────────────────────────────────────────────────────────────────────
// Subconfig merge tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_rotation_parse_and_serialize() {
    assert_eq!(LogRotation::from_str("hourly"), LogRotation::Hourly);
    assert_eq!(LogRotation::from_str("DAILY"), LogRotation::Daily);
    assert_eq!(LogRotation::from_str("never"), LogRotation::Never);
    // Unknown values fall back to daily
    assert_eq!(LogRotation::from_str("weekly"), LogRotation::Daily);

    assert_eq!(LogRotation::Hourly.as_str(), "hourly");
    assert_eq!(LogRotation::Daily.as_str(), "daily");
    assert_eq!(LogRotation::Never.as_str(), "never");
}

#[test]
fn test_logging_from_file_merges_defaults() {
    let partial = FileLogging {
        level: Some("trace".to_string()),
        ..FileLogging::default()
    };

    let logging = LoggingConfig::from_file(Some(partial));
    assert_eq!(logging.level, "trace");
    // Everything else stays at the default
    assert!(!logging.file_enabled);
    assert_eq!(logging.file_rotation, LogRotation::Daily);
    assert_eq!(logging.file_prefix, "viewdeck");
}

#[test]
fn test_logging_from_file_absent_section_is_all_defaults() {
    let logging = LoggingConfig::from_file(None);
    let defaults = LoggingConfig::default();
    assert_eq!(logging.level, defaults.level);
    assert_eq!(logging.file_dir, defaults.file_dir);
}

#[test]
fn test_session_from_file_merges_defaults() {
    let partial = FileSession {
        enabled: Some(false),
        path: None,
    };

    let session = SessionConfig::from_file(Some(partial));
    assert!(!session.enabled);
    assert_eq!(session.path, SessionConfig::default().path);

    let overridden = SessionConfig::from_file(Some(FileSession {
        enabled: None,
        path: Some("/tmp/deck.json".to_string()),
    }));
    assert!(overridden.enabled);
    assert_eq!(overridden.path, std::path::PathBuf::from("/tmp/deck.json"));
}
