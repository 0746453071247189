//! Sink factory.
//!
//! Maps the `type` value of a [`LoggingConfig`] to a constructor. New sink
//! kinds are added with [`SinkFactory::register`]; nothing else needs to
//! change to make them available to [`configure`](crate::registry::configure).
//!
//! ## Example
//!
//! ```
//! use logmux_core::factory::SinkFactory;
//! use logmux_core::sinks::NullSink;
//! use logmux_types::LoggingConfig;
//!
//! let mut factory = SinkFactory::new();
//! factory.register("quiet", |_config| Ok(Box::new(NullSink)));
//!
//! let logger = factory.produce(&LoggingConfig::of_type("quiet")).unwrap();
//! assert_eq!(logger.sink_kind(), "");
//! ```

use crate::logger::Logger;
use crate::sinks::{CompositeSink, ConsoleSink, FileSink, NullSink};
use indexmap::IndexMap;
use logmux_types::config::TYPE_KEY;
use logmux_types::{bail, LoggingConfig, Result, Sink};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::sync::Arc;

/// Constructor registered under a type name.
pub type SinkCreator = Arc<dyn Fn(&LoggingConfig) -> Result<Box<dyn Sink>> + Send + Sync>;

/// Registration map from type name to sink constructor.
#[derive(Clone)]
pub struct SinkFactory {
    creators: IndexMap<String, SinkCreator>,
}

impl SinkFactory {
    /// Factory with the built-in types: `""`, `std_out`, `file`, `master`.
    pub fn new() -> Self {
        let mut factory = Self::empty();
        factory.register(NullSink::KIND, |_| Ok(Box::new(NullSink)));
        factory.register(ConsoleSink::KIND, |_| Ok(Box::new(ConsoleSink::new())));
        factory.register(FileSink::KIND, |config| {
            Ok(Box::new(FileSink::from_config(config)?))
        });
        factory.register(CompositeSink::KIND, |config| {
            Ok(Box::new(CompositeSink::master(config)?))
        });
        factory
    }

    /// Factory without any registered type.
    pub fn empty() -> Self {
        Self {
            creators: IndexMap::new(),
        }
    }

    /// Register `creator` under `name`, replacing any previous registration
    /// of that name.
    pub fn register<F>(&mut self, name: impl Into<String>, creator: F) -> &mut Self
    where
        F: Fn(&LoggingConfig) -> Result<Box<dyn Sink>> + Send + Sync + 'static,
    {
        self.creators.insert(name.into(), Arc::new(creator));
        self
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.creators.contains_key(name)
    }

    /// Registered type names in registration order.
    pub fn types(&self) -> Vec<&str> {
        self.creators.keys().map(String::as_str).collect()
    }

    /// Build the sink declared by `config`.
    pub fn produce_sink(&self, config: &LoggingConfig) -> Result<Box<dyn Sink>> {
        let Some(sink_type) = config.sink_type() else {
            bail!(
                Config,
                "Logging factory configuration requires a '{}' of logger",
                TYPE_KEY
            );
        };
        let Some(creator) = self.creators.get(sink_type) else {
            bail!(Config, "Couldn't produce logger for type: {}", sink_type);
        };

        tracing::debug!(sink_type, "building log sink");
        creator(config)
    }

    /// Build a [`Logger`] writing to the sink declared by `config`.
    pub fn produce(&self, config: &LoggingConfig) -> Result<Logger> {
        self.produce_sink(config).map(Logger::new)
    }
}

impl Default for SinkFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SinkFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SinkFactory")
            .field("types", &self.types())
            .finish()
    }
}

static GLOBAL_FACTORY: Lazy<RwLock<SinkFactory>> = Lazy::new(|| RwLock::new(SinkFactory::new()));

/// Process-wide factory used by the process-wide registry.
///
/// Register custom types here before the first log call:
///
/// ```
/// use logmux_core::factory::global_factory;
/// use logmux_core::sinks::ConsoleSink;
///
/// global_factory()
///     .write()
///     .register("console", |_| Ok(Box::new(ConsoleSink::new())));
/// assert!(global_factory().read().contains("console"));
/// ```
pub fn global_factory() -> &'static RwLock<SinkFactory> {
    &GLOBAL_FACTORY
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_types() {
        let factory = SinkFactory::new();
        assert_eq!(factory.types(), vec!["", "std_out", "file", "master"]);
    }

    #[test]
    fn test_produces_each_builtin() {
        let temp_dir = TempDir::new().unwrap();
        let file_name = temp_dir.path().join("f.log");
        let factory = SinkFactory::new();

        for sink_type in ["", "std_out", "file", "master"] {
            let config = LoggingConfig::of_type(sink_type)
                .with("file_name", file_name.to_string_lossy());
            let sink = factory.produce_sink(&config).unwrap();
            assert_eq!(sink.kind(), sink_type);
        }
    }

    #[test]
    fn test_missing_type_is_config_error() {
        let config = LoggingConfig::new().with("file_name", "x.log");
        let err = SinkFactory::new().produce(&config).unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("requires a 'type'"));
    }

    #[test]
    fn test_unknown_type_names_value() {
        let err = SinkFactory::new()
            .produce(&LoggingConfig::of_type("syslog"))
            .unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("syslog"));
    }

    #[test]
    fn test_file_errors_propagate() {
        let err = SinkFactory::new()
            .produce(&LoggingConfig::of_type("file"))
            .unwrap_err();
        assert!(err.to_string().contains("file_name"));
    }

    #[test]
    fn test_register_extends_without_touching_builtins() {
        let mut factory = SinkFactory::new();
        factory.register("quiet", |_| Ok(Box::new(NullSink)));

        assert!(factory.contains("quiet"));
        assert_eq!(factory.types().len(), 5);

        let logger = factory.produce(&LoggingConfig::of_type("quiet")).unwrap();
        assert_eq!(logger.sink_kind(), "");
        let logger = factory.produce(&LoggingConfig::of_type("std_out")).unwrap();
        assert_eq!(logger.sink_kind(), "std_out");
    }

    #[test]
    fn test_register_replaces_existing_name() {
        let mut factory = SinkFactory::empty();
        factory
            .register("out", |_| Ok(Box::new(ConsoleSink::new())))
            .register("out", |_| Ok(Box::new(NullSink)));

        let sink = factory.produce_sink(&LoggingConfig::of_type("out")).unwrap();
        assert_eq!(sink.kind(), "");
        assert_eq!(factory.types(), vec!["out"]);
    }

    #[test]
    fn test_empty_factory_rejects_everything() {
        let err = SinkFactory::empty()
            .produce(&LoggingConfig::of_type(""))
            .unwrap_err();
        assert!(err.is_config());
    }
}
