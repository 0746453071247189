//! CLI structure and command definitions.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use logmux_core::registry;
use logmux_types::config::{FILE_NAME_KEY, REOPEN_INTERVAL_KEY, TYPE_KEY};
use logmux_types::{LoggingConfig, Severity};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "logmux")]
#[command(version = logmux_core::VERSION)]
#[command(about = "Thread-safe multi-sink logging", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// YAML logger configuration (flat mapping of type, file_name, ...)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Sink type: "", std_out, file or master
    #[arg(short = 't', long = "type", global = true)]
    pub sink_type: Option<String>,

    /// Output file for file-backed sinks
    #[arg(short, long, global = true)]
    pub file_name: Option<String>,

    /// Seconds between reopens of the output file
    #[arg(short, long, global = true)]
    pub reopen_interval: Option<u64>,

    /// Enable debug diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log from several threads at once
    Demo {
        /// Number of worker threads
        #[arg(long, default_value_t = 4)]
        threads: usize,

        /// Rounds of messages per worker
        #[arg(long, default_value_t = 2)]
        iterations: usize,

        /// Pause between two messages, in milliseconds
        #[arg(long, default_value_t = 10)]
        pause_ms: u64,
    },

    /// Log a single message
    Write {
        /// Message text
        message: String,

        /// Severity (trace, debug, info, warn, error, alert, crit, emerg, notice)
        #[arg(short, long, conflicts_with = "tag")]
        severity: Option<Severity>,

        /// Custom tag printed verbatim instead of a severity
        #[arg(long)]
        tag: Option<String>,
    },

    /// List the registered sink types
    Types,
}

impl Cli {
    /// Configuration selected by the global options, or `None` to let the
    /// registry fall back to its default on first use.
    ///
    /// Flags override values read from `--config`. Without a config file
    /// and without `--type`, the sink type defaults to `master`.
    pub fn logging_config(&self) -> Result<Option<LoggingConfig>> {
        let mut config = match &self.config {
            Some(path) => LoggingConfig::load(path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None if self.sink_type.is_none()
                && self.file_name.is_none()
                && self.reopen_interval.is_none() =>
            {
                return Ok(None);
            }
            None => LoggingConfig::new(),
        };

        if let Some(sink_type) = &self.sink_type {
            config.set(TYPE_KEY, sink_type.as_str());
        }
        if let Some(file_name) = &self.file_name {
            config.set(FILE_NAME_KEY, file_name.as_str());
        }
        if let Some(interval) = self.reopen_interval {
            config.set(REOPEN_INTERVAL_KEY, interval.to_string());
        }
        if self.config.is_none() && config.sink_type().is_none() {
            config.set(TYPE_KEY, "master");
        }

        Ok(Some(config))
    }

    pub fn execute(&self) -> Result<()> {
        use crate::commands::*;

        if let Some(config) = self.logging_config()? {
            registry::configure(&config).context("Failed to configure logger")?;
        }

        match &self.command {
            Commands::Demo {
                threads,
                iterations,
                pause_ms,
            } => demo::execute(*threads, *iterations, *pause_ms),
            Commands::Write {
                message,
                severity,
                tag,
            } => write::execute(message, *severity, tag.as_deref()),
            Commands::Types => types::execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("logmux").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_flags_leaves_registry_default() {
        let cli = parse(&["types"]);
        assert!(cli.logging_config().unwrap().is_none());
    }

    #[test]
    fn test_flags_build_config() {
        let cli = parse(&["--type", "file", "--file-name", "out.log", "-r", "1", "types"]);
        let config = cli.logging_config().unwrap().unwrap();

        assert_eq!(config.sink_type(), Some("file"));
        assert_eq!(config.file_name(), Some("out.log"));
        assert_eq!(config.get(REOPEN_INTERVAL_KEY), Some("1"));
    }

    #[test]
    fn test_file_name_alone_defaults_to_master() {
        let cli = parse(&["write", "hi", "--file-name", "x.log"]);
        let config = cli.logging_config().unwrap().unwrap();
        assert_eq!(config.sink_type(), Some("master"));
        assert_eq!(config.file_name(), Some("x.log"));
    }

    #[test]
    fn test_flags_override_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logging.yml");
        fs::write(&path, "type: master\nfile_name: a.log\nreopen_interval: 5\n").unwrap();

        let cli = parse(&["--config", path.to_str().unwrap(), "--type", "file", "types"]);
        let config = cli.logging_config().unwrap().unwrap();

        assert_eq!(config.sink_type(), Some("file"));
        assert_eq!(config.file_name(), Some("a.log"));
        assert_eq!(config.get(REOPEN_INTERVAL_KEY), Some("5"));
    }

    #[test]
    fn test_file_type_does_not_invent_file_name() {
        let cli = parse(&["--type", "file", "types"]);
        let config = cli.logging_config().unwrap().unwrap();
        assert_eq!(config.file_name(), None);
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let cli = parse(&["--config", "/nonexistent/logging.yml", "types"]);
        assert!(cli.logging_config().is_err());
    }

    #[test]
    fn test_write_parses_severity() {
        let cli = parse(&["write", "hello", "--severity", "warning"]);
        match cli.command {
            Commands::Write { severity, tag, .. } => {
                assert_eq!(severity, Some(Severity::Warn));
                assert!(tag.is_none());
            }
            _ => panic!("expected write"),
        }
    }

    #[test]
    fn test_severity_and_tag_conflict() {
        let args = ["logmux", "write", "hi", "--severity", "info", "--tag", "X"];
        assert!(Cli::try_parse_from(args).is_err());
    }
}
