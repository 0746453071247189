//! # logmux Core
//!
//! Sinks, the logger core, the sink factory and the logger registry.
//!
//! This crate provides:
//!
//! - **Sinks**: discard, standard output, append-only file with periodic
//!   reopen, and a composite that fans out to several sinks
//! - **Logger**: formats `<timestamp> <actor> [<TAG>] <message>` lines
//! - **Factory**: builds sinks from a string-keyed configuration, open for
//!   new sink types through registration
//! - **Registry**: a once-only logger holder, plus process-wide shorthands
//!   (`info`, `warn`, ...) and format-style macros
//!
//! ## Example
//!
//! ```no_run
//! use logmux_core::{registry, LoggingConfig, Severity};
//!
//! registry::configure(&LoggingConfig::of_type("master").with("file_name", "app.log"))?;
//! registry::info("service started")?;
//! registry::log("custom event", "AUDIT")?;
//! registry::log("low disk", Severity::Warn)?;
//! # Ok::<(), logmux_core::LogError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod factory;
pub mod identity;
pub mod logger;
pub mod macros;
pub mod registry;
pub mod sinks;
pub mod time;

// Re-export commonly used items
pub use factory::{global_factory, SinkFactory};
pub use logger::{Logger, Tag};
pub use registry::Registry;
pub use logmux_types::{LogError, LoggingConfig, Result, Severity, Sink};

/// logmux version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
