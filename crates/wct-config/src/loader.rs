// SPDX-FileCopyrightText: 2026 WCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports `./wct.toml` > `~/.config/wct/wct.toml` > `/etc/wct/wct.toml`
//! with environment variable overrides via the `WCT_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::WctConfig;

/// Local config file name, looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "wct.toml";

/// System-wide config file.
pub const SYSTEM_CONFIG_FILE: &str = "/etc/wct/wct.toml";

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/wct/wct.toml` (system-wide)
/// 3. `~/.config/wct/wct.toml` (user config)
/// 4. `./wct.toml` (local directory)
/// 5. `WCT_*` environment variables
pub fn load_config() -> Result<WctConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no file lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<WctConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(WctConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<WctConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(WctConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used by [`load_config`] before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(WctConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_FILE))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// Path of the per-user config file, when the platform has a config dir.
pub fn user_config_path() -> Option<std::path::PathBuf> {
    dirs::config_dir().map(|d| d.join("wct").join(LOCAL_CONFIG_FILE))
}

/// Environment provider nesting on a double underscore.
///
/// `WCT_PLUGINS__SAUCE__DISABLED=true` maps to `plugins.sauce.disabled`, so
/// single underscores inside plugin names (`WCT_PLUGINS__HEADLESS_CHROME=false`)
/// stay part of the name.
fn env_provider() -> Env {
    Env::prefixed("WCT_").split("__")
}

#[cfg(test)]
mod tests {
    use figment::Jail;

    use super::*;
    use crate::model::PluginConfig;

    #[test]
    fn env_vars_nest_on_double_underscore() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "run.toml",
                r#"
[plugins.sauce]
username = "ci"

[plugins.headless_chrome]
"#,
            )?;
            jail.set_env("WCT_PLUGINS__SAUCE__DISABLED", "true");
            jail.set_env("WCT_PLUGINS__HEADLESS_CHROME", "false");

            let config = load_config_from_path(Path::new("run.toml"))?;

            let sauce = &config.plugins["sauce"];
            assert!(!sauce.is_active());
            assert_eq!(
                sauce.options().and_then(|o| o.get("username")),
                Some(&serde_json::json!("ci"))
            );
            assert_eq!(config.plugins["headless_chrome"], PluginConfig::Toggle(false));
            Ok(())
        });
    }

    #[test]
    fn local_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(LOCAL_CONFIG_FILE, "[plugins]\nlocal = true\n")?;

            let config = build_figment().extract::<WctConfig>()?;
            assert_eq!(config.plugins["local"], PluginConfig::Toggle(true));
            Ok(())
        });
    }
}
