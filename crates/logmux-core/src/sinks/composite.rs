//! Fan-out sink.

use super::{ConsoleSink, FileSink};
use logmux_types::{LoggingConfig, Result, Sink};

/// Sink forwarding every line to an ordered list of child sinks.
///
/// Children are owned outright and dropped with the composite. A failing
/// child never prevents the remaining children from receiving the line; the
/// first failure is returned once every child has been called.
pub struct CompositeSink {
    children: Vec<Box<dyn Sink>>,
}

impl CompositeSink {
    /// Factory type name.
    pub const KIND: &'static str = "master";

    /// Wrap an ordered set of sinks.
    pub fn new(children: Vec<Box<dyn Sink>>) -> Self {
        Self { children }
    }

    /// Console sink followed by a file sink built from the same `config`.
    pub fn master(config: &LoggingConfig) -> Result<Self> {
        let file = FileSink::from_config(config)?;
        Ok(Self::new(vec![Box::new(ConsoleSink::new()), Box::new(file)]))
    }

    /// Implementation names of the children, in dispatch order.
    pub fn child_kinds(&self) -> Vec<&'static str> {
        self.children.iter().map(|child| child.kind()).collect()
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the composite has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Sink for CompositeSink {
    fn write(&self, line: &str) -> Result<()> {
        let mut first_error = None;

        for child in &self.children {
            if let Err(e) = child.write(line) {
                if first_error.is_none() {
                    first_error = Some(e);
                } else {
                    tracing::warn!(sink = child.kind(), error = %e, "log sink write failed");
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn kind(&self) -> &'static str {
        Self::KIND
    }
}

impl std::fmt::Debug for CompositeSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeSink")
            .field("children", &self.child_kinds())
            .finish()
    }
}
