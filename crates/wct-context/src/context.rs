// SPDX-FileCopyrightText: 2026 WCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The per-run context shared by the runner and its plugins.

use std::future::Future;
use std::sync::Arc;

use futures::future::try_join_all;
use tracing::{debug, info};

use wct_config::{PluginConfig, WctConfig};
use wct_core::{Plugin, PluginResolver, WctError};

use crate::hooks::{HookArgs, HookRegistry};

/// Configuration and extension state for one test run.
///
/// Owns the run configuration, the plugin resolver used to turn active
/// plugin names into instances, and the hook registry. `E` is the error
/// type hook handlers fail with.
pub struct Context<E = WctError> {
    config: WctConfig,
    resolver: Arc<dyn PluginResolver>,
    hooks: HookRegistry<E>,
}

impl<E: Send + 'static> Context<E> {
    /// Creates a context with no plugins configured.
    pub fn new(resolver: Arc<dyn PluginResolver>) -> Self {
        Self::with_config(WctConfig::default(), resolver)
    }

    /// Creates a context for the given configuration.
    pub fn with_config(config: WctConfig, resolver: Arc<dyn PluginResolver>) -> Self {
        Self {
            config,
            resolver,
            hooks: HookRegistry::new(),
        }
    }

    /// The run configuration.
    pub fn config(&self) -> &WctConfig {
        &self.config
    }

    /// The configuration entry for plugin `name`, if one exists.
    pub fn plugin_options(&self, name: &str) -> Option<&PluginConfig> {
        self.config.plugins.get(name)
    }

    /// Names of the active plugins, sorted, without resolving them.
    pub fn enabled_plugins(&self) -> Vec<String> {
        self.config
            .active_plugin_names()
            .map(str::to_string)
            .collect()
    }

    /// Resolves every active plugin.
    ///
    /// The resolver is called exactly once per active name and never for
    /// entries that are falsy or `disabled = true`. Resolutions run
    /// concurrently; if any fails, its error is returned and no plugins are.
    pub async fn plugins(&self) -> Result<Vec<Arc<dyn Plugin>>, WctError> {
        let mut pending = Vec::new();
        for (name, entry) in &self.config.plugins {
            if entry.is_active() {
                pending.push(self.resolver.resolve(name));
            } else {
                debug!(plugin = %name, "plugin disabled, not resolving");
            }
        }

        let plugins = try_join_all(pending).await?;
        info!(count = plugins.len(), "plugins resolved");
        Ok(plugins)
    }

    /// Registers `handler` to run on every emission of hook `name`.
    ///
    /// Handlers for the same name run in the order they were registered.
    pub fn hook<F, Fut>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(HookArgs) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), E>> + Send + 'static,
    {
        self.hooks.register(name, handler);
    }

    /// Emits hook `name`, forwarding `args` unchanged to each handler.
    ///
    /// Handlers run one at a time in registration order. The first failure
    /// stops the emission and is returned exactly as the handler produced it.
    /// With no handlers registered this succeeds immediately.
    pub fn emit_hook(
        &self,
        name: &str,
        args: HookArgs,
    ) -> impl Future<Output = Result<(), E>> + Send + use<E> {
        self.hooks.emit(name, args)
    }

    /// The hook registry, for introspection.
    pub fn hooks(&self) -> &HookRegistry<E> {
        &self.hooks
    }
}

impl<E> std::fmt::Debug for Context<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("config", &self.config)
            .field("hooks", &self.hooks)
            .finish_non_exhaustive()
    }
}
