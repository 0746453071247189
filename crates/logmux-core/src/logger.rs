//! Logger core: formats messages into lines and hands them to a sink.
//!
//! A line has the shape
//!
//! ```text
//! <timestamp> <actor> [<TAG>] <message>\n
//! ```
//!
//! where `<TAG>` is either the severity tag (`INFO`, `ERROR`, ...) or a
//! caller-supplied custom tag printed verbatim.

use crate::{identity, time};
use logmux_types::{Result, Severity, Sink};
use std::fmt;

/// Tag used by [`Logger::log_default_custom`].
pub const DEFAULT_CUSTOM_TAG: &str = "CUSTOM";

/// What goes between the brackets of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag<'a> {
    /// One of the ranked severities
    Severity(Severity),
    /// Free-text label, printed as given
    Custom(&'a str),
}

impl Tag<'_> {
    /// Text printed between the brackets.
    pub fn as_str(&self) -> &str {
        match self {
            Tag::Severity(severity) => severity.tag(),
            Tag::Custom(tag) => *tag,
        }
    }
}

impl Default for Tag<'_> {
    fn default() -> Self {
        Tag::Custom(DEFAULT_CUSTOM_TAG)
    }
}

impl From<Severity> for Tag<'_> {
    fn from(severity: Severity) -> Self {
        Tag::Severity(severity)
    }
}

impl<'a> From<&'a str> for Tag<'a> {
    fn from(tag: &'a str) -> Self {
        Tag::Custom(tag)
    }
}

impl<'a> From<&'a String> for Tag<'a> {
    fn from(tag: &'a String) -> Self {
        Tag::Custom(tag.as_str())
    }
}

impl fmt::Display for Tag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formats log calls into lines and forwards each to one sink.
pub struct Logger {
    sink: Box<dyn Sink>,
    actor: String,
    clock: fn() -> String,
}

impl Logger {
    /// Create a logger writing to `sink`, stamped with the current user.
    pub fn new(sink: Box<dyn Sink>) -> Self {
        Self {
            sink,
            actor: identity::username().to_string(),
            clock: time::timestamp,
        }
    }

    /// Override the actor printed after the timestamp.
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = actor.into();
        self
    }

    /// Override the timestamp source.
    pub fn with_clock(mut self, clock: fn() -> String) -> Self {
        self.clock = clock;
        self
    }

    /// Log `message` under a severity or custom tag.
    pub fn log<'a>(&self, message: &str, tag: impl Into<Tag<'a>>) -> Result<()> {
        let line = self.format(message, tag.into());
        self.sink.write(&line)
    }

    /// Log `message` under the severity with numeric rank `rank`.
    ///
    /// Ranks outside the enumeration are dropped without reaching the sink.
    pub fn log_rank(&self, message: &str, rank: u8) -> Result<()> {
        match Severity::from_rank(rank) {
            Some(severity) => self.log(message, severity),
            None => Ok(()),
        }
    }

    /// Log `message` under a free-text tag.
    pub fn log_custom(&self, message: &str, tag: &str) -> Result<()> {
        self.log(message, Tag::Custom(tag))
    }

    /// Log `message` under the `CUSTOM` tag.
    pub fn log_default_custom(&self, message: &str) -> Result<()> {
        self.log(message, Tag::default())
    }

    /// Pass an already formatted line straight to the sink.
    pub fn log_line(&self, line: &str) -> Result<()> {
        self.sink.write(line)
    }

    /// Build the line for `message` without writing it.
    pub fn format(&self, message: &str, tag: Tag<'_>) -> String {
        let stamp = (self.clock)();
        let tag = tag.as_str();

        let mut line =
            String::with_capacity(stamp.len() + self.actor.len() + tag.len() + message.len() + 6);
        line.push_str(&stamp);
        line.push(' ');
        line.push_str(&self.actor);
        line.push_str(" [");
        line.push_str(tag);
        line.push_str("] ");
        line.push_str(message);
        line.push('\n');
        line
    }

    /// Actor printed on every line.
    pub fn actor(&self) -> &str {
        &self.actor
    }

    /// Implementation name of the underlying sink, see [`Sink::kind`].
    pub fn sink_kind(&self) -> &'static str {
        self.sink.kind()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("sink", &self.sink.kind())
            .field("actor", &self.actor)
            .finish()
    }
}
