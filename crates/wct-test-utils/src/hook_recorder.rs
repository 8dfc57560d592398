// SPDX-FileCopyrightText: 2026 WCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hook handlers that capture their invocations for assertion in tests.

use std::sync::Arc;

use futures::future::BoxFuture;
use serde_json::Value;
use tokio::sync::Mutex;

/// One captured handler invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    /// Label the handler was created with.
    pub label: String,
    /// Arguments the handler received, exactly as forwarded.
    pub args: Vec<Value>,
}

/// Shared log of hook handler invocations.
///
/// Handlers created from the same recorder append to one log, so the log
/// order is the order the handlers actually ran in.
#[derive(Debug, Clone, Default)]
pub struct HookRecorder {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl HookRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// A handler that records its arguments under `label` and succeeds.
    pub fn handler<E: Send + 'static>(
        &self,
        label: &str,
    ) -> impl Fn(Vec<Value>) -> BoxFuture<'static, Result<(), E>> + Send + Sync + 'static + use<E>
    {
        let calls = self.calls.clone();
        let label = label.to_string();
        move |args: Vec<Value>| -> BoxFuture<'static, Result<(), E>> {
            let calls = calls.clone();
            let label = label.clone();
            Box::pin(async move {
                calls.lock().await.push(RecordedCall { label, args });
                Ok(())
            })
        }
    }

    /// A handler that records its arguments under `label` and fails with `error`.
    pub fn failing_handler<E: Clone + Send + Sync + 'static>(
        &self,
        label: &str,
        error: E,
    ) -> impl Fn(Vec<Value>) -> BoxFuture<'static, Result<(), E>> + Send + Sync + 'static + use<E>
    {
        let calls = self.calls.clone();
        let label = label.to_string();
        move |args: Vec<Value>| -> BoxFuture<'static, Result<(), E>> {
            let calls = calls.clone();
            let label = label.clone();
            let error = error.clone();
            Box::pin(async move {
                calls.lock().await.push(RecordedCall { label, args });
                Err(error)
            })
        }
    }

    /// All captured invocations, in the order they happened.
    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().await.clone()
    }

    /// Labels of the captured invocations, in order.
    pub async fn labels(&self) -> Vec<String> {
        self.calls.lock().await.iter().map(|c| c.label.clone()).collect()
    }
}
