//! Discarding sink.

use logmux_types::{Result, Sink};

/// Sink that accepts every line and drops it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl NullSink {
    /// Factory type name.
    pub const KIND: &'static str = "";
}

impl Sink for NullSink {
    #[inline]
    fn write(&self, _line: &str) -> Result<()> {
        Ok(())
    }

    fn kind(&self) -> &'static str {
        Self::KIND
    }
}
