//! Integration tests for configuration management

use reaction_network::config::{Config, ConfigOverrides, RenderConfig};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(!config.logging.level.is_empty());
    assert_eq!(config.paths.data_file, "reactions.json");
    assert!(!config.paths.out_dir.is_empty());
    assert_eq!(config.render.height, "800px");
    assert!((config.render.spring_length - 150.0).abs() < f64::EPSILON);
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r##"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[paths]
data_file = "data/reactions.json"
out_dir = "./out"

[render]
bgcolor = "#ffffff"
gravity = -80.0
open_browser = false
"##;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.data_file, "data/reactions.json");
    assert_eq!(config.paths.out_dir, "./out");
    assert_eq!(config.render.bgcolor, "#ffffff");
    assert!((config.render.gravity + 80.0).abs() < f64::EPSILON);
    assert!(!config.render.open_browser);
}

#[test]
fn test_config_from_toml_partial() {
    let toml_str = r#"
[logging]
level = "error"

[paths]
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.paths.data_file, "");
    // Missing render section falls back entirely to built-in values
    assert_eq!(config.render, RenderConfig::default());
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$REACTION_VIZ/test.log"

[paths]
out_dir = "$REACTION_VIZ/out"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    assert!(config.logging.file.contains("reactionviz"));
    assert!(!config.logging.file.contains("$REACTION_VIZ"));
    assert!(config.paths.out_dir.ends_with("out"));
    assert!(!config.paths.out_dir.contains("$REACTION_VIZ"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config.set("verbose", "true").expect("Failed to set verbose");
    assert!(config.logging.verbose);

    config
        .set("spring-length", "220")
        .expect("Failed to set spring length");
    assert_eq!(config.get("spring_length").unwrap(), "220");

    assert!(config.set("gravity", "strong").is_err());
    assert!(config.set("open_browser", "maybe").is_err());

    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("level", "error").expect("Failed to set level");
    config.set("gravity", "-10").expect("Failed to set gravity");

    config.unset("level", &defaults).expect("Failed to unset level");
    config
        .unset("gravity", &defaults)
        .expect("Failed to unset gravity");

    assert_eq!(config.logging.level, defaults.logging.level);
    assert!((config.render.gravity - defaults.render.gravity).abs() < f64::EPSILON);
    assert!(config.unset("bogus", &defaults).is_err());
}

#[test]
fn test_config_save_and_load() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config
        .set("simplified_spring_length", "250")
        .expect("Failed to set spring length");

    let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
    fs::write(&config_file, toml_str).expect("Failed to write config");

    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded.logging.level, "info");
    assert_eq!(loaded.render, config.render);
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        data_file: Some("other.json".to_string()),
        out_dir: Some("./custom_out".to_string()),
        open_browser: Some(false),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.data_file, "other.json");
    assert_eq!(config.paths.out_dir, "./custom_out");
    assert!(!config.render.open_browser);
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let before = config.clone();

    config.apply_overrides(&ConfigOverrides {
        level: Some("debug".to_string()),
        ..ConfigOverrides::default()
    });

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.paths.data_file, before.paths.data_file);
    assert_eq!(config.render, before.render);
}

#[test]
fn test_config_display_format() {
    let display_str = Config::from_defaults().to_string();

    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[paths]"));
    assert!(display_str.contains("[render]"));
    assert!(display_str.contains("data_file"));
    assert!(display_str.contains("spring_strength"));
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    let toml_str = r#"
[logging]
level = "error"

[paths]
data_file = ""
out_dir = ""
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    assert!(config.merge_defaults(&defaults));
    assert_eq!(config.paths.data_file, defaults.paths.data_file);
    assert_eq!(config.paths.out_dir, defaults.paths.out_dir);
    assert!(!config.merge_defaults(&defaults));
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"

[paths]
data_file = "mine.json"
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    config.merge_defaults(&Config::from_defaults());

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.paths.data_file, "mine.json");
}

#[test]
fn test_get_config_dir() {
    let dir = Config::get_config_dir();

    assert!(dir.to_string_lossy().contains("reactionviz"));
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();
    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}

#[test]
fn test_run_overrides_stay_out_of_saved_config() {
    let mut stored = Config::from_defaults();
    let defaults = Config::from_defaults();

    let effective = stored.with_overrides(&ConfigOverrides {
        level: Some("error".to_string()),
        out_dir: Some("/tmp/throwaway".to_string()),
        ..ConfigOverrides::default()
    });
    assert_eq!(effective.paths.out_dir, "/tmp/throwaway");
    assert_eq!(effective.logging.level, "error");

    stored
        .set("spring_length", "180")
        .expect("Failed to set spring length");
    let saved = toml::to_string_pretty(&stored).expect("Failed to serialize");
    let reloaded = Config::from_toml(&saved).expect("Failed to parse saved config");

    assert!((reloaded.render.spring_length - 180.0).abs() < f64::EPSILON);
    assert_eq!(reloaded.paths.out_dir, defaults.paths.out_dir);
    assert_eq!(reloaded.logging.level, defaults.logging.level);
    assert!(!saved.contains("/tmp/throwaway"));
}
