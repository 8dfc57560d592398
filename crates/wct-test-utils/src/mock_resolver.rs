// SPDX-FileCopyrightText: 2026 WCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock plugin resolver for deterministic testing.
//!
//! `MockResolver` implements `PluginResolver` by handing out a
//! [`MockPlugin`] for every requested name, recording each request so tests
//! can assert exactly which names were resolved.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use wct_core::{Plugin, PluginResolver, WctError};

/// A plugin instance that only knows its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockPlugin {
    name: String,
}

impl MockPlugin {
    /// Create a mock plugin with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Plugin for MockPlugin {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A resolver that records every name it is asked for.
///
/// Names registered with [`MockResolver::failing_on`] fail with
/// [`WctError::PluginLoad`]; every other name resolves to a [`MockPlugin`].
pub struct MockResolver {
    requested: Arc<Mutex<Vec<String>>>,
    failing: HashSet<String>,
}

impl MockResolver {
    /// Create a resolver that resolves every name.
    pub fn new() -> Self {
        Self {
            requested: Arc::new(Mutex::new(Vec::new())),
            failing: HashSet::new(),
        }
    }

    /// Make resolution of `name` fail.
    pub fn failing_on(mut self, name: impl Into<String>) -> Self {
        self.failing.insert(name.into());
        self
    }

    /// Every name requested so far, in request order.
    pub async fn requested(&self) -> Vec<String> {
        self.requested.lock().await.clone()
    }

    /// Number of resolve calls made so far.
    pub async fn request_count(&self) -> usize {
        self.requested.lock().await.len()
    }
}

impl Default for MockResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PluginResolver for MockResolver {
    async fn resolve(&self, name: &str) -> Result<Arc<dyn Plugin>, WctError> {
        self.requested.lock().await.push(name.to_string());

        if self.failing.contains(name) {
            return Err(WctError::PluginLoad {
                name: name.to_string(),
                source: Box::new(std::io::Error::other("mock resolver failure")),
            });
        }

        debug!(plugin = %name, "mock plugin resolved");
        Ok(Arc::new(MockPlugin::new(name)))
    }
}
