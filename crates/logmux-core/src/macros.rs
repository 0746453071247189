//! Format-style shorthands for the process-wide logger.
//!
//! Each macro formats its arguments like `format!` and forwards the result to
//! the matching function in [`registry`](crate::registry), returning its
//! `Result<()>`.
//!
//! ```no_run
//! use logmux_core::{log_custom, log_info, log_warn};
//!
//! let worker = 3;
//! log_info!("worker {} started", worker)?;
//! log_warn!("queue at {}%", 90)?;
//! log_custom!("User Defined", "worker {} checked in", worker)?;
//! # Ok::<(), logmux_types::LogError>(())
//! ```

/// Log at TRACE.
#[macro_export]
macro_rules! log_trace  { ($($arg:tt)+) => { $crate::registry::trace(&format!($($arg)+)) } }
/// Log at DEBUG.
#[macro_export]
macro_rules! log_debug  { ($($arg:tt)+) => { $crate::registry::debug(&format!($($arg)+)) } }
/// Log at INFO.
#[macro_export]
macro_rules! log_info   { ($($arg:tt)+) => { $crate::registry::info(&format!($($arg)+)) } }
/// Log at WARN.
#[macro_export]
macro_rules! log_warn   { ($($arg:tt)+) => { $crate::registry::warn(&format!($($arg)+)) } }
/// Log at ERROR.
#[macro_export]
macro_rules! log_error  { ($($arg:tt)+) => { $crate::registry::error(&format!($($arg)+)) } }
/// Log at ALERT.
#[macro_export]
macro_rules! log_alert  { ($($arg:tt)+) => { $crate::registry::alert(&format!($($arg)+)) } }
/// Log at CRIT.
#[macro_export]
macro_rules! log_crit   { ($($arg:tt)+) => { $crate::registry::crit(&format!($($arg)+)) } }
/// Log at EMERG.
#[macro_export]
macro_rules! log_emerg  { ($($arg:tt)+) => { $crate::registry::emerg(&format!($($arg)+)) } }
/// Log at NOTICE.
#[macro_export]
macro_rules! log_notice { ($($arg:tt)+) => { $crate::registry::notice(&format!($($arg)+)) } }

/// Log under a free-text tag: `log_custom!("tag", "fmt", args...)`.
#[macro_export]
macro_rules! log_custom {
    ($tag:expr, $($arg:tt)+) => {
        $crate::registry::log_custom(&format!($($arg)+), $tag)
    };
}
