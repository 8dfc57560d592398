// SPDX-FileCopyrightText: 2026 WCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hook registry and sequential, halt-on-first-error emission.
//!
//! Handlers are registered against a hook name and run in registration
//! order. Each emission forwards its argument list unchanged to every
//! handler and awaits each one before starting the next.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;
use serde_json::Value;
use tracing::{debug, warn};

/// Positional arguments forwarded to every handler of an emission.
pub type HookArgs = Vec<Value>;

/// A registered hook handler.
pub type HookHandler<E> = Arc<dyn Fn(HookArgs) -> BoxFuture<'static, Result<(), E>> + Send + Sync>;

/// Registry of hook handlers keyed by hook name.
///
/// `E` is the failure type handlers return; an emission fails with exactly
/// the value the failing handler produced.
pub struct HookRegistry<E> {
    handlers: HashMap<String, Vec<HookHandler<E>>>,
}

impl<E: Send + 'static> HookRegistry<E> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Appends `handler` to the handlers for `name`.
    pub fn register<F, Fut>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(HookArgs) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), E>> + Send + 'static,
    {
        let name = name.into();
        let entries = self.handlers.entry(name.clone()).or_default();
        entries.push(Arc::new(move |args: HookArgs| -> BoxFuture<'static, Result<(), E>> {
            Box::pin(handler(args))
        }));

        debug!(hook = %name, position = entries.len(), "hook handler registered");
    }

    /// Runs every handler for `name` in registration order.
    ///
    /// The handler list is captured when this is called, so the returned
    /// future does not borrow the registry and handlers registered while it
    /// runs are not part of this emission. The first handler to fail stops
    /// the emission and its error is returned as-is.
    pub fn emit(
        &self,
        name: &str,
        args: HookArgs,
    ) -> impl Future<Output = Result<(), E>> + Send + use<E> {
        let handlers = self.handlers.get(name).cloned().unwrap_or_default();
        let name = name.to_string();

        async move {
            if handlers.is_empty() {
                return Ok(());
            }

            debug!(
                hook = %name,
                handler_count = handlers.len(),
                arg_count = args.len(),
                "emitting hook"
            );

            for (index, handler) in handlers.iter().enumerate() {
                if let Err(err) = handler(args.clone()).await {
                    warn!(hook = %name, handler = index, "hook handler failed, halting emission");
                    return Err(err);
                }
            }

            Ok(())
        }
    }

    /// Whether any handlers are registered for `name`.
    pub fn has_hook(&self, name: &str) -> bool {
        self.handler_count(name) > 0
    }

    /// Number of handlers registered for `name`.
    pub fn handler_count(&self, name: &str) -> usize {
        self.handlers.get(name).map_or(0, Vec::len)
    }

    /// All hook names with at least one handler, sorted.
    pub fn hook_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<E: Send + 'static> Default for HookRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for HookRegistry<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (name, handlers) in &self.handlers {
            map.entry(name, &handlers.len());
        }
        map.finish()
    }
}
