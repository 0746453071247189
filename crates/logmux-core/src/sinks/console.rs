//! Standard output sink.

use logmux_types::{Result, Sink};
use std::io::{self, Write};

/// Sink writing each line to standard output.
///
/// Each line goes out in a single `write_all` on the locked handle followed
/// by a flush, so concurrent callers never split a line.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// Factory type name.
    pub const KIND: &'static str = "std_out";

    /// Create a console sink.
    pub fn new() -> Self {
        Self
    }
}

impl Sink for ConsoleSink {
    fn write(&self, line: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(line.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    fn kind(&self) -> &'static str {
        Self::KIND
    }
}
