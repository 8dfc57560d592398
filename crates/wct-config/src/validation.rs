// SPDX-FileCopyrightText: 2026 WCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use crate::diagnostic::ConfigError;
use crate::model::WctConfig;

/// Validate a deserialized configuration.
///
/// Returns all collected validation errors rather than failing on the first.
pub fn validate_config(config: &WctConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    for name in config.plugins.keys() {
        if name.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: "plugins: plugin name must not be empty".to_string(),
            });
        } else if name.chars().any(char::is_whitespace) {
            errors.push(ConfigError::Validation {
                message: format!("plugins.`{name}`: plugin name must not contain whitespace"),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PluginConfig;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&WctConfig::default()).is_ok());
    }

    #[test]
    fn collects_every_bad_plugin_name() {
        let mut config = WctConfig::default();
        config.plugins.insert(String::new(), PluginConfig::Toggle(true));
        config.plugins.insert("sauce labs".into(), PluginConfig::Toggle(true));
        config.plugins.insert("local".into(), PluginConfig::Toggle(true));

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("must not be empty"))
        ));
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("sauce labs"))
        ));
    }
}
