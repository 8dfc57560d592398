// SPDX-FileCopyrightText: 2026 WCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the wct test runner core.

use thiserror::Error;

/// The primary error type used by plugin resolvers and, by default, hook handlers.
#[derive(Debug, Error)]
pub enum WctError {
    /// Configuration errors (invalid TOML, type mismatches, failed validation).
    #[error("configuration error: {0}")]
    Config(String),

    /// No plugin with the requested name could be located.
    #[error("plugin not found: {name}")]
    PluginNotFound { name: String },

    /// A plugin was located but could not be constructed.
    #[error("failed to load plugin {name}: {source}")]
    PluginLoad {
        name: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A hook handler failed.
    #[error("hook {hook} failed: {message}")]
    Hook { hook: String, message: String },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl WctError {
    /// Shorthand for a [`WctError::Hook`] failure raised from a handler.
    pub fn hook(hook: impl Into<String>, message: impl Into<String>) -> Self {
        WctError::Hook {
            hook: hook.into(),
            message: message.into(),
        }
    }
}
