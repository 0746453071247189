//! Error types for logmux operations.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for logmux operations.
///
/// Construction problems (bad or missing configuration) surface as
/// [`LogError::Config`]; failures to open or write a sink's backing resource
/// surface as one of the I/O variants.
#[derive(Error, Debug)]
pub enum LogError {
    /// Configuration-related error, raised while building a sink or logger
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure to open, reopen, or write a named log file
    #[error("IO error on {}: {source}", path.display())]
    File {
        /// Path of the file being opened or written
        path: PathBuf,
        /// Underlying operating system error
        #[source]
        source: std::io::Error,
    },

    /// I/O error on an unnamed stream (e.g. standard output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl LogError {
    /// Build a [`LogError::File`] for `path`.
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LogError::File {
            path: path.into(),
            source,
        }
    }

    /// Whether this error was raised while validating configuration.
    pub fn is_config(&self) -> bool {
        matches!(self, LogError::Config(_))
    }
}

/// A specialized Result type for logmux operations.
pub type Result<T> = std::result::Result<T, LogError>;

/// Return early with a [`LogError`] of the named message-carrying variant.
///
/// ```
/// use logmux_types::{bail, LogError, Result};
///
/// fn interval(raw: &str) -> Result<u64> {
///     let Ok(secs) = raw.parse() else {
///         bail!(Config, "{} is not a valid reopen interval", raw);
///     };
///     Ok(secs)
/// }
///
/// assert!(matches!(interval("soon"), Err(LogError::Config(_))));
/// ```
#[macro_export]
macro_rules! bail {
    ($variant:ident, $msg:literal) => {
        return Err($crate::LogError::$variant(format!($msg)))
    };
    ($variant:ident, $fmt:literal, $($arg:tt)*) => {
        return Err($crate::LogError::$variant(format!($fmt, $($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_error_names_path() {
        let err = LogError::file(
            "/var/log/app.log",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/var/log/app.log"));
        assert!(msg.contains("missing"));
        assert!(!err.is_config());
    }

    #[test]
    fn test_bail_config() {
        fn check(ok: bool) -> Result<()> {
            if !ok {
                bail!(Config, "bad value: {}", 42);
            }
            Ok(())
        }

        let err = check(false).unwrap_err();
        assert!(err.is_config());
        assert_eq!(err.to_string(), "Configuration error: bad value: 42");
        assert!(check(true).is_ok());
    }
}
