//! # logmux Types
//!
//! Core types, traits, and enums shared across all logmux crates.
//!
//! This crate provides the fundamental building blocks of the logging
//! facility:
//!
//! - The [`Severity`] enumeration and its bracketed display tags
//! - The string-keyed [`LoggingConfig`] consumed by the sink factory
//! - The [`Sink`] trait every output destination implements
//! - Error types and result aliases
//!
//! ## Example
//!
//! ```
//! use logmux_types::{LoggingConfig, Severity};
//!
//! let config = LoggingConfig::of_type("std_out");
//! assert_eq!(config.sink_type(), Some("std_out"));
//!
//! assert_eq!(Severity::Error.tag(), "ERROR");
//! assert_eq!(Severity::from_rank(3), Some(Severity::Warn));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod enums;
pub mod traits;
pub mod config;

// Re-export common types for convenience
pub use errors::{LogError, Result};
pub use enums::Severity;
pub use traits::Sink;
pub use config::LoggingConfig;
