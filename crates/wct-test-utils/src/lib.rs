// SPDX-FileCopyrightText: 2026 WCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for wct integration tests.
//!
//! # Components
//!
//! - [`MockResolver`] - plugin resolver that records requested names and can be told to fail
//! - [`MockPlugin`] - minimal plugin instance handed out by `MockResolver`
//! - [`HookRecorder`] - hook handlers that capture their invocations

pub mod hook_recorder;
pub mod mock_resolver;

pub use hook_recorder::{HookRecorder, RecordedCall};
pub use mock_resolver::{MockPlugin, MockResolver};
