// SPDX-FileCopyrightText: 2026 WCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin lookup capability injected into the run context.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::WctError;
use crate::traits::plugin::Plugin;

/// Locates and constructs plugin instances by name.
///
/// Must be callable many times with different names within one
/// `Context::plugins` call. Caching, disk access and construction are the
/// implementation's concern; errors are surfaced to the caller unchanged.
#[async_trait]
pub trait PluginResolver: Send + Sync {
    /// Resolves the plugin registered under `name`.
    async fn resolve(&self, name: &str) -> Result<Arc<dyn Plugin>, WctError>;
}
