//! Configuration tests
//!
//! The serialized template must parse back, and every source must land in the
//! right field with env > file > defaults precedence.

use super::*;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

/// Verify that serialized config can be parsed back.
#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );
}

#[test]
fn test_config_roundtrip_preserves_values() {
    let config = Config {
        theme: "Catppuccin Latte".to_string(),
        host: Host::Blink,
        hterm_receiver: "term_.prefs".to_string(),
        themes_dir: Some(PathBuf::from("/tmp/themes")),
        extract_bundled: false,
        logging: LoggingConfig {
            level: "debug".to_string(),
            format: LogFormat::Json,
        },
    };

    let file: FileConfig = toml::from_str(&config.to_toml()).unwrap();
    let reloaded = Config::from_sources(file, no_env).unwrap();

    assert_eq!(reloaded.theme, config.theme);
    assert_eq!(reloaded.host, config.host);
    assert_eq!(reloaded.hterm_receiver, config.hterm_receiver);
    assert_eq!(reloaded.themes_dir, config.themes_dir);
    assert_eq!(reloaded.extract_bundled, config.extract_bundled);
    assert_eq!(reloaded.logging, config.logging);
}

#[test]
fn test_config_without_themes_dir_serializes_comment() {
    let config = Config {
        themes_dir: None,
        ..Config::default()
    };
    let toml_str = config.to_toml();
    assert!(toml_str.contains("# themes_dir ="));

    let file: FileConfig = toml::from_str(&toml_str).unwrap();
    assert!(file.themes_dir.is_none());
}

#[test]
fn test_free_form_strings_survive_serialization() {
    let config = Config {
        theme: "Night \"Owl\" \\ \u{7f}".to_string(),
        hterm_receiver: "term_\u{1b}.prefs".to_string(),
        themes_dir: Some(PathBuf::from("C:\\Users\\me\\themes")),
        ..Config::default()
    };

    let toml_str = config.to_toml();
    let file: FileConfig = toml::from_str(&toml_str)
        .unwrap_or_else(|e| panic!("template did not parse: {e}\n{toml_str}"));
    let reloaded = Config::from_sources(file, no_env).unwrap();

    assert_eq!(reloaded.theme, config.theme);
    assert_eq!(reloaded.hterm_receiver, config.hterm_receiver);
    assert_eq!(reloaded.themes_dir, config.themes_dir);
}

// ─────────────────────────────────────────────────────────────────────────────
// Template file tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_write_template_creates_parents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("termtheme").join("config.toml");

    Config::write_template(&path).unwrap();

    let file = Config::load_file_config(&path).unwrap();
    assert_eq!(file.theme.as_deref(), Some(DEFAULT_THEME));
}

#[test]
fn test_write_template_keeps_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "theme = \"Catppuccin Latte\"\n").unwrap();

    Config::write_template(&path).unwrap();

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "theme = \"Catppuccin Latte\"\n"
    );
}

#[test]
fn test_write_template_reports_failure() {
    let dir = tempfile::tempdir().unwrap();
    // Parent "directory" is a regular file
    let blocker = dir.path().join("not_a_dir");
    std::fs::write(&blocker, "").unwrap();

    assert!(Config::write_template(&blocker.join("config.toml")).is_err());
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_defaults_when_nothing_set() {
    let config = Config::from_sources(FileConfig::default(), no_env).unwrap();
    assert_eq!(config.theme, DEFAULT_THEME);
    assert_eq!(config.host, Host::Hterm);
    assert_eq!(config.hterm_receiver, "t.prefs_");
    assert!(config.extract_bundled);
    assert_eq!(config.logging, LoggingConfig::default());
}

#[test]
fn test_file_overrides_defaults() {
    let file: FileConfig = toml::from_str(
        r#"
theme = "Catppuccin Latte"
host = "blink"
extract_bundled = false

[logging]
level = "info"
format = "json"
"#,
    )
    .unwrap();

    let config = Config::from_sources(file, no_env).unwrap();
    assert_eq!(config.theme, "Catppuccin Latte");
    assert_eq!(config.host, Host::Blink);
    assert!(!config.extract_bundled);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn test_env_overrides_file() {
    let file: FileConfig = toml::from_str(
        r#"
theme = "Catppuccin Latte"
host = "blink"
themes_dir = "/from/file"

[logging]
level = "info"
"#,
    )
    .unwrap();

    let env = env_from(&[
        ("TERMTHEME_THEME", "Night Owl"),
        ("TERMTHEME_HOST", "secure-shell"),
        ("TERMTHEME_THEMES_DIR", "/from/env"),
        ("TERMTHEME_LOG", "trace"),
    ]);

    let config = Config::from_sources(file, env).unwrap();
    assert_eq!(config.theme, "Night Owl");
    assert_eq!(config.host, Host::Hterm);
    assert_eq!(config.themes_dir, Some(PathBuf::from("/from/env")));
    assert_eq!(config.logging.level, "trace");
}

#[test]
fn test_unknown_host_is_an_error() {
    let env = env_from(&[("TERMTHEME_HOST", "kitty")]);
    let err = Config::from_sources(FileConfig::default(), env).unwrap_err();
    assert!(matches!(err, ConfigError::Host(_)));
}

#[test]
fn test_unknown_log_format_falls_back() {
    assert_eq!(LogFormat::from_str("yaml"), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str("JSON"), LogFormat::Json);
}

// ─────────────────────────────────────────────────────────────────────────────
// File loading
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_missing_config_file_means_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let file = Config::load_file_config(&dir.path().join("config.toml")).unwrap();
    assert!(file.theme.is_none());
    assert!(file.logging.is_none());
}

#[test]
fn test_broken_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "theme = \"unterminated\n").unwrap();

    let err = Config::load_file_config(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}
