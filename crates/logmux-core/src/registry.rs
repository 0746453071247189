//! Logger registry and the process-wide convenience entry points.
//!
//! A [`Registry`] owns at most one [`Logger`]. The first successful
//! `configure` (or the first log call, which falls back to the registry's
//! default configuration) installs it; every later `configure` is a no-op.
//!
//! Components that want an explicit logger can own a `Registry` or a
//! `Logger` directly. The free functions in this module wrap a single
//! process-wide registry built with [`LoggingConfig::process_default`]
//! (`type: master`, `file_name: Log.log`) as its fallback.
//!
//! ## Example
//!
//! ```no_run
//! use logmux_core::registry;
//! use logmux_types::LoggingConfig;
//!
//! registry::configure(
//!     &LoggingConfig::of_type("file")
//!         .with("file_name", "out.log")
//!         .with("reopen_interval", "1"),
//! )?;
//! registry::info("hello")?;
//! # Ok::<(), logmux_types::LogError>(())
//! ```

use crate::factory::{global_factory, SinkFactory};
use crate::logger::{Logger, Tag};
use logmux_types::{LoggingConfig, Result, Severity};
use once_cell::sync::{Lazy, OnceCell};

/// Holder of a once-only logger.
#[derive(Debug)]
pub struct Registry {
    logger: OnceCell<Logger>,
    default_config: LoggingConfig,
}

impl Registry {
    /// Registry falling back to [`LoggingConfig::process_default`].
    pub fn new() -> Self {
        Self::with_default(LoggingConfig::process_default())
    }

    /// Registry falling back to `default_config` when used unconfigured.
    pub fn with_default(default_config: LoggingConfig) -> Self {
        Self {
            logger: OnceCell::new(),
            default_config,
        }
    }

    /// Build and install a logger from `config` unless one is installed.
    ///
    /// Returns `true` if this call installed the logger, `false` if a logger
    /// already existed and `config` was ignored.
    pub fn configure(&self, factory: &SinkFactory, config: &LoggingConfig) -> Result<bool> {
        let mut installed = false;
        self.logger.get_or_try_init(|| {
            installed = true;
            factory.produce(config)
        })?;

        if installed {
            tracing::debug!(sink_type = ?config.sink_type(), "logger configured");
        } else {
            tracing::debug!("logger already configured, ignoring new configuration");
        }
        Ok(installed)
    }

    /// Install an already built logger unless one is installed.
    pub fn install(&self, logger: Logger) -> bool {
        self.logger.set(logger).is_ok()
    }

    /// The installed logger, building it from the default configuration on
    /// first use.
    pub fn logger(&self, factory: &SinkFactory) -> Result<&Logger> {
        self.logger
            .get_or_try_init(|| factory.produce(&self.default_config))
    }

    /// The installed logger, if any.
    pub fn get(&self) -> Option<&Logger> {
        self.logger.get()
    }

    /// Whether a logger has been installed.
    pub fn is_configured(&self) -> bool {
        self.logger.get().is_some()
    }

    /// Configuration used when no logger was configured explicitly.
    pub fn default_config(&self) -> &LoggingConfig {
        &self.default_config
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: Lazy<Registry> = Lazy::new(Registry::new);

/// The process-wide registry.
pub fn global() -> &'static Registry {
    &GLOBAL
}

/// Configure the process-wide logger (once only).
///
/// Returns `false` when a logger was already in place; the new configuration
/// is then ignored.
pub fn configure(config: &LoggingConfig) -> Result<bool> {
    let factory = global_factory().read();
    GLOBAL.configure(&factory, config)
}

/// The process-wide logger, built from the default configuration if
/// [`configure`] was never called.
pub fn logger() -> Result<&'static Logger> {
    if let Some(logger) = GLOBAL.get() {
        return Ok(logger);
    }
    let factory = global_factory().read();
    GLOBAL.logger(&factory)
}

/// Log `message` under a severity or custom tag.
pub fn log<'a>(message: &str, tag: impl Into<Tag<'a>>) -> Result<()> {
    logger()?.log(message, tag)
}

/// Log `message` under the severity with numeric rank `rank`; unknown ranks
/// are dropped.
pub fn log_rank(message: &str, rank: u8) -> Result<()> {
    logger()?.log_rank(message, rank)
}

/// Log `message` under a free-text tag.
pub fn log_custom(message: &str, tag: &str) -> Result<()> {
    logger()?.log_custom(message, tag)
}

/// Log `message` under the `CUSTOM` tag.
pub fn custom(message: &str) -> Result<()> {
    logger()?.log_default_custom(message)
}

/// Write an already formatted line.
pub fn log_line(line: &str) -> Result<()> {
    logger()?.log_line(line)
}

/// Log at TRACE.
pub fn trace(message: &str) -> Result<()> {
    log(message, Severity::Trace)
}

/// Log at DEBUG.
pub fn debug(message: &str) -> Result<()> {
    log(message, Severity::Debug)
}

/// Log at INFO.
pub fn info(message: &str) -> Result<()> {
    log(message, Severity::Info)
}

/// Log at WARN.
pub fn warn(message: &str) -> Result<()> {
    log(message, Severity::Warn)
}

/// Log at ERROR.
pub fn error(message: &str) -> Result<()> {
    log(message, Severity::Error)
}

/// Log at ALERT.
pub fn alert(message: &str) -> Result<()> {
    log(message, Severity::Alert)
}

/// Log at CRIT.
pub fn crit(message: &str) -> Result<()> {
    log(message, Severity::Crit)
}

/// Log at EMERG.
pub fn emerg(message: &str) -> Result<()> {
    log(message, Severity::Emerg)
}

/// Log at NOTICE.
pub fn notice(message: &str) -> Result<()> {
    log(message, Severity::Notice)
}
