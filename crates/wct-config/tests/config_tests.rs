// SPDX-FileCopyrightText: 2026 WCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the wct configuration system.

use std::io::Write;

use wct_config::diagnostic::ConfigError;
use wct_config::{
    load_and_validate_str, load_config_from_path, load_config_from_str, PluginConfig, WctConfig,
};

/// A plugins table with mixed entries deserializes into the right variants.
#[test]
fn plugins_table_deserializes() {
    let toml = r#"
verbose = true

[plugins]
local = false
remote = true

[plugins.sauce]
username = "ci"

[plugins.grid]
disabled = true
hub = "http://localhost:4444"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.plugins["local"], PluginConfig::Toggle(false));
    assert_eq!(config.plugins["remote"], PluginConfig::Toggle(true));
    assert!(config.plugins["sauce"].is_active());
    assert!(!config.plugins["grid"].is_active());
    assert_eq!(
        config.plugins["grid"].options().and_then(|o| o.get("hub")),
        Some(&serde_json::json!("http://localhost:4444"))
    );
    assert_eq!(config.extra.get("verbose"), Some(&serde_json::json!(true)));

    let active: Vec<&str> = config.active_plugin_names().collect();
    assert_eq!(active, vec!["remote", "sauce"]);
}

/// An empty document yields the defaults: no plugins at all.
#[test]
fn empty_toml_uses_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");
    assert_eq!(config, WctConfig::default());
    assert!(config.plugins.is_empty());
}

/// Malformed TOML is reported as a diagnostic, not a panic.
#[test]
fn malformed_toml_produces_diagnostic() {
    let errors = load_and_validate_str("[plugins\nlocal = ").expect_err("should reject bad TOML");
    assert!(!errors.is_empty());
}

/// A `plugins` value that is not a table is a type error.
#[test]
fn non_table_plugins_is_invalid_type() {
    let errors = load_and_validate_str("plugins = 5\n").expect_err("should reject plugins = 5");
    assert!(!errors.is_empty());
    let rendered = errors[0].to_string();
    assert!(
        rendered.contains("invalid type"),
        "error should mention the type mismatch, got: {rendered}"
    );
}

/// Validation runs after a successful load and reports bad plugin names.
#[test]
fn validation_rejects_whitespace_in_plugin_name() {
    let errors = load_and_validate_str("[plugins]\n\"sauce labs\" = true\n")
        .expect_err("should fail validation");
    assert!(errors.iter().any(
        |e| matches!(e, ConfigError::Validation { message } if message.contains("sauce labs"))
    ));
}

/// A config file on disk is picked up by `load_config_from_path`.
#[test]
fn loads_from_file_path() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "[plugins]\nlocal = true\n\n[plugins.sauce]\ndisabled = true").expect("write");

    let config = load_config_from_path(file.path()).expect("file should load");
    let active: Vec<&str> = config.active_plugin_names().collect();
    assert_eq!(active, vec!["local"]);
}

/// A missing file is silently skipped and defaults apply.
#[test]
fn missing_file_falls_back_to_defaults() {
    let config = load_config_from_path(std::path::Path::new("/nonexistent/wct.toml"))
        .expect("missing file should be skipped");
    assert!(config.plugins.is_empty());
}
