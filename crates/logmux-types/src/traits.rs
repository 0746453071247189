//! Core trait definitions for logmux abstractions.

use crate::errors::Result;

/// A destination for fully formatted log lines.
///
/// Implementers receive one complete line per call, already terminated with
/// `\n`, and must emit it without interleaving bytes from concurrent calls on
/// the same instance.
pub trait Sink: Send + Sync {
    /// Durably emit one formatted line.
    fn write(&self, line: &str) -> Result<()>;

    /// Name of the sink implementation (e.g. `"file"`).
    ///
    /// Built-in sinks report the type name the default factory registers
    /// them under. A creator registered under another name may return any
    /// sink, so `kind()` is not tied to the registration name.
    fn kind(&self) -> &'static str;
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write(&self, line: &str) -> Result<()> {
        (**self).write(line)
    }

    fn kind(&self) -> &'static str {
        (**self).kind()
    }
}
