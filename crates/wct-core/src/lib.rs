// SPDX-FileCopyrightText: 2026 WCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the wct test runner.
//!
//! Provides the error type and the plugin boundary traits shared by the
//! configuration and run-context crates.

pub mod error;
pub mod traits;

pub use error::WctError;
pub use traits::{Plugin, PluginResolver};
