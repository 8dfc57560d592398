// SPDX-FileCopyrightText: 2026 WCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model for a test run.
//!
//! Only the `plugins` table is interpreted here. Every other top-level key
//! belongs to the surrounding runner and is carried through untouched in
//! [`WctConfig::extra`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level run configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct WctConfig {
    /// Per-plugin configuration keyed by plugin name.
    #[serde(default)]
    pub plugins: BTreeMap<String, PluginConfig>,

    /// Top-level keys not interpreted by the core.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl WctConfig {
    /// Names of plugins whose entry is active, in name order.
    pub fn active_plugin_names(&self) -> impl Iterator<Item = &str> {
        self.plugins
            .iter()
            .filter(|(_, entry)| entry.is_active())
            .map(|(name, _)| name.as_str())
    }
}

/// A single plugin's configuration entry.
///
/// Deserialization tries the variants in order, so `false`/`true` become
/// [`PluginConfig::Toggle`], tables become [`PluginConfig::Options`], and any
/// other value lands in [`PluginConfig::Other`].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PluginConfig {
    /// `true` enables the plugin with no options, `false` disables it.
    Toggle(bool),
    /// A table of plugin options, optionally carrying `disabled = true`.
    Options(PluginOptions),
    /// Any other value; the plugin is active iff the value is truthy.
    Other(Value),
}

impl PluginConfig {
    /// Whether this entry activates its plugin.
    ///
    /// Active iff the value is truthy and its `disabled` flag is not `true`.
    pub fn is_active(&self) -> bool {
        match self {
            PluginConfig::Toggle(enabled) => *enabled,
            PluginConfig::Options(options) => !options.disabled,
            PluginConfig::Other(value) => is_truthy(value),
        }
    }

    /// The option table for this entry, if it is one.
    pub fn options(&self) -> Option<&PluginOptions> {
        match self {
            PluginConfig::Options(options) => Some(options),
            _ => None,
        }
    }
}

impl Default for PluginConfig {
    fn default() -> Self {
        PluginConfig::Options(PluginOptions::default())
    }
}

/// Option table for a plugin entry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PluginOptions {
    /// Explicitly turns the plugin off while keeping its options around.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,

    /// Plugin-specific settings, passed through to the plugin unchanged.
    #[serde(flatten)]
    pub settings: Map<String, Value>,
}

impl PluginOptions {
    /// Look up a plugin-specific setting.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }
}

/// Truthiness of a loosely typed configuration value.
///
/// `null`, `false`, `0`, `NaN` and `""` are falsy; everything else,
/// including empty arrays and objects, is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
