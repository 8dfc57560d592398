// SPDX-FileCopyrightText: 2026 WCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base trait for resolved plugin instances.

/// A resolved plugin instance (local browser runner, remote grid runner, ...).
///
/// The core only needs to identify a plugin; what a plugin does is decided
/// by the runner that consumes it.
pub trait Plugin: Send + Sync + 'static {
    /// Returns the configured name this plugin was resolved from.
    fn name(&self) -> &str;
}

impl std::fmt::Debug for dyn Plugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Plugin").field("name", &self.name()).finish()
    }
}
