//! Logger configuration.
//!
//! A [`LoggingConfig`] is a flat mapping from option name to string value.
//! The factory reads `type` to pick a constructor, and each sink reads the
//! keys it understands (`file_name`, `reopen_interval`, ...). Unknown keys are
//! kept so custom sinks can define their own extensions.
//!
//! ## Example
//!
//! ```
//! use logmux_types::LoggingConfig;
//!
//! let config = LoggingConfig::of_type("file")
//!     .with("file_name", "out.log")
//!     .with("reopen_interval", "1");
//!
//! assert_eq!(config.sink_type(), Some("file"));
//! assert_eq!(config.get("file_name"), Some("out.log"));
//! ```

use crate::errors::{LogError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Key naming the sink type to build.
pub const TYPE_KEY: &str = "type";

/// Key naming the output file for file-backed sinks.
pub const FILE_NAME_KEY: &str = "file_name";

/// Key holding the reopen interval of file-backed sinks, in whole seconds.
pub const REOPEN_INTERVAL_KEY: &str = "reopen_interval";

/// Reopen interval used when `reopen_interval` is not configured.
pub const DEFAULT_REOPEN_INTERVAL: Duration = Duration::from_secs(300);

/// String-to-string logger configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoggingConfig(IndexMap<String, String>);

impl LoggingConfig {
    /// Create an empty configuration (no `type` key).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with `type` set to `sink_type`.
    pub fn of_type(sink_type: impl Into<String>) -> Self {
        Self::new().with(TYPE_KEY, sink_type)
    }

    /// Configuration used when the process-wide logger is first touched
    /// without having been configured: console plus `Log.log`.
    pub fn process_default() -> Self {
        Self::of_type("master").with(FILE_NAME_KEY, "Log.log")
    }

    /// Load a configuration from a YAML mapping of string keys to values.
    ///
    /// A leading `~` in `path` is expanded to the home directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = expand_path(path);
        let content = fs::read_to_string(&path).map_err(|e| {
            LogError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse a configuration from YAML text.
    ///
    /// Scalar values (numbers, booleans) are accepted and kept in their
    /// textual form, so `reopen_interval: 1` works unquoted.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let raw: IndexMap<String, serde_yaml::Value> = serde_yaml::from_str(content)
            .map_err(|e| LogError::Config(format!("Failed to parse config: {}", e)))?;

        raw.into_iter()
            .map(|(key, value)| scalar_to_string(&key, value).map(|value| (key, value)))
            .collect()
    }

    /// Builder-style setter.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Set `key` to `value`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Get the raw value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Get the value for `key`, failing with a configuration error naming the
    /// key when it is absent or empty.
    pub fn require(&self, key: &str) -> Result<&str> {
        match self.get(key) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(LogError::Config(format!(
                "missing required key '{}'",
                key
            ))),
        }
    }

    /// The declared sink type, if any.
    pub fn sink_type(&self) -> Option<&str> {
        self.get(TYPE_KEY)
    }

    /// The configured output file, if any.
    pub fn file_name(&self) -> Option<&str> {
        self.get(FILE_NAME_KEY).filter(|name| !name.is_empty())
    }

    /// Parse `reopen_interval`, falling back to [`DEFAULT_REOPEN_INTERVAL`].
    ///
    /// The value must be a non-negative decimal integer count of seconds.
    pub fn reopen_interval(&self) -> Result<Duration> {
        match self.get(REOPEN_INTERVAL_KEY) {
            None => Ok(DEFAULT_REOPEN_INTERVAL),
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| {
                    LogError::Config(format!("{} is not a valid reopen interval", raw))
                }),
        }
    }

    /// Iterate over all key/value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of configured keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no keys are configured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for LoggingConfig
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

fn scalar_to_string(key: &str, value: serde_yaml::Value) -> Result<String> {
    use serde_yaml::Value;

    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        _ => Err(LogError::Config(format!(
            "value of '{}' must be a plain scalar",
            key
        ))),
    }
}

/// Expand a leading tilde to the user's home directory.
fn expand_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();

    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }

    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reopen_interval_default() {
        let config = LoggingConfig::of_type("file").with("file_name", "a.log");
        assert_eq!(config.reopen_interval().unwrap(), Duration::from_secs(300));
    }

    #[test]
    fn test_reopen_interval_parses_seconds() {
        let config = LoggingConfig::of_type("file").with("reopen_interval", "0");
        assert_eq!(config.reopen_interval().unwrap(), Duration::ZERO);

        let config = config.with("reopen_interval", "15");
        assert_eq!(config.reopen_interval().unwrap(), Duration::from_secs(15));
    }

    #[test]
    fn test_reopen_interval_rejects_garbage() {
        for bad in ["abc", "-1", "1.5", ""] {
            let config = LoggingConfig::of_type("file").with("reopen_interval", bad);
            let err = config.reopen_interval().unwrap_err();
            assert!(err.is_config(), "{:?} should be a config error", bad);
        }
    }

    #[test]
    fn test_require_names_missing_key() {
        let config = LoggingConfig::of_type("file").with("file_name", "");
        let err = config.require("file_name").unwrap_err();
        assert!(err.to_string().contains("file_name"));
        assert_eq!(config.file_name(), None);
    }

    #[test]
    fn test_from_iterator_keeps_order() {
        let config: LoggingConfig = [("type", "master"), ("file_name", "x.log"), ("colour", "no")]
            .into_iter()
            .collect();
        let keys: Vec<&str> = config.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["type", "file_name", "colour"]);
        assert_eq!(config.len(), 3);
    }

    #[test]
    fn test_process_default() {
        let config = LoggingConfig::process_default();
        assert_eq!(config.sink_type(), Some("master"));
        assert_eq!(config.file_name(), Some("Log.log"));
    }

    #[test]
    fn test_load_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "type: file\nfile_name: out.log\nreopen_interval: 1").unwrap();

        let config = LoggingConfig::load(file.path()).unwrap();
        assert_eq!(config.sink_type(), Some("file"));
        assert_eq!(config.file_name(), Some("out.log"));
        assert_eq!(config.reopen_interval().unwrap(), Duration::from_secs(1));
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LoggingConfig::load(dir.path().join("nope.yml")).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_nested_value_is_config_error() {
        let err = LoggingConfig::from_yaml("type: file\nfile_name:\n  nested: true\n").unwrap_err();
        assert!(err.to_string().contains("file_name"));
    }

    #[test]
    fn test_invalid_yaml_is_config_error() {
        let err = LoggingConfig::from_yaml("- just\n- a list\n").unwrap_err();
        assert!(err.is_config());
    }
}
