// SPDX-FileCopyrightText: 2026 WCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions at the plugin boundary.
//!
//! Plugins and resolvers are object-safe and use `#[async_trait]` so they
//! can be held as `Arc<dyn _>` by the run context.

pub mod plugin;
pub mod resolver;

pub use plugin::Plugin;
pub use resolver::PluginResolver;
