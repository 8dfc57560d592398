// SPDX-FileCopyrightText: 2026 WCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Run context for the wct test runner.
//!
//! A [`Context`] decides which configured plugins are active for a run and
//! resolves them through an injected [`PluginResolver`](wct_core::PluginResolver).
//! It also carries the hook registry through which independent parts of the
//! runner register lifecycle handlers and later emit them.
//!
//! ```no_run
//! # async fn run(resolver: std::sync::Arc<dyn wct_core::PluginResolver>) -> Result<(), wct_core::WctError> {
//! use wct_context::Context;
//!
//! let config = wct_config::load_config_from_str("[plugins]\nlocal = true\n")
//!     .map_err(|e| wct_core::WctError::Config(e.to_string()))?;
//! let mut context: Context = Context::with_config(config, resolver);
//!
//! context.hook("prepare", |_args| async { Ok(()) });
//! let plugins = context.plugins().await?;
//! context.emit_hook("prepare", vec![]).await?;
//! # let _ = plugins;
//! # Ok(())
//! # }
//! ```

pub mod context;
pub mod hooks;

pub use context::Context;
pub use hooks::{HookArgs, HookHandler, HookRegistry};
