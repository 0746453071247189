//! Append-only file sink with periodic reopen.
//!
//! The sink keeps one handle open in append mode. After every write it checks
//! whether the reopen interval has elapsed since the handle was last
//! (re)opened, and if so closes and reopens the file. A file that was moved
//! or deleted by an external rotation tool is therefore recreated on the
//! first write after the interval, without a timer thread. A sink that is
//! never written to never reopens.
//!
//! A failed write drops the handle, so the check that follows it reopens the
//! file right away. The write error is reported ahead of any reopen error.
//!
//! ```text
//!            open ok                       interval elapsed
//!  CLOSED ───────────▶ OPEN ──write──▶ check ────────────▶ reopen
//!    ▲                  ▲                │                   │
//!    │                  └──── not due ───┘                   │
//!    └──────────────────── open failed ◀─────────────────────┘
//! ```

use logmux_types::config::FILE_NAME_KEY;
use logmux_types::{bail, LogError, LoggingConfig, Result, Sink};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Sink appending lines to a file.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    reopen_interval: Duration,
    state: Mutex<FileState>,
}

#[derive(Debug)]
struct FileState {
    /// `None` while closed.
    file: Option<File>,
    last_reopen: Instant,
}

impl FileSink {
    /// Factory type name.
    pub const KIND: &'static str = "file";

    /// Build a file sink from `file_name` and `reopen_interval`.
    ///
    /// Configuration is validated before anything on disk is touched.
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        let Some(path) = config.file_name() else {
            bail!(
                Config,
                "No output file provided to file sink (set '{}')",
                FILE_NAME_KEY
            );
        };
        let reopen_interval = config.reopen_interval()?;

        Self::open(path, reopen_interval)
    }

    /// Open `path` in append mode, creating it if needed.
    pub fn open(path: impl Into<PathBuf>, reopen_interval: Duration) -> Result<Self> {
        let path = path.into();
        let file = open_append(&path)?;

        tracing::debug!(
            path = %path.display(),
            reopen_secs = reopen_interval.as_secs(),
            "opened log file"
        );

        Ok(Self {
            path,
            reopen_interval,
            state: Mutex::new(FileState {
                file: Some(file),
                last_reopen: Instant::now(),
            }),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Minimum time between two reopens.
    pub fn reopen_interval(&self) -> Duration {
        self.reopen_interval
    }

    /// Whether the sink currently holds a valid handle.
    pub fn is_open(&self) -> bool {
        self.state.lock().file.is_some()
    }
}

impl FileState {
    fn reopen_due(&self, interval: Duration, now: Instant) -> bool {
        self.file.is_none()
            || interval.is_zero()
            || now.saturating_duration_since(self.last_reopen) > interval
    }

    fn reopen(&mut self, path: &Path) -> Result<()> {
        // Dropping the old handle closes it; there is nothing to report on close.
        self.file = None;
        self.file = Some(open_append(path)?);
        self.last_reopen = Instant::now();

        tracing::debug!(path = %path.display(), "reopened log file");
        Ok(())
    }

    fn handle(&mut self, path: &Path) -> Result<&mut File> {
        if self.file.is_none() {
            self.reopen(path)?;
        }
        self.file.as_mut().ok_or_else(|| {
            LogError::file(path, io::Error::new(io::ErrorKind::NotFound, "log file is closed"))
        })
    }
}

impl Sink for FileSink {
    fn write(&self, line: &str) -> Result<()> {
        let mut state = self.state.lock();

        let written = state.handle(&self.path).and_then(|file| {
            file.write_all(line.as_bytes())
                .and_then(|()| file.flush())
                .map_err(|e| LogError::file(&self.path, e))
        });
        if written.is_err() {
            // A handle that failed a write is not trusted again.
            state.file = None;
        }

        let reopened = if state.reopen_due(self.reopen_interval, Instant::now()) {
            state.reopen(&self.path)
        } else {
            Ok(())
        };

        written.and(reopened)
    }

    fn kind(&self) -> &'static str {
        Self::KIND
    }
}

fn open_append(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LogError::file(path, e))
}
