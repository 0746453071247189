//! Log a single message.

use anyhow::{Context, Result};
use logmux_core::{registry, Severity, Tag};

pub fn execute(message: &str, severity: Option<Severity>, tag: Option<&str>) -> Result<()> {
    let tag = match (severity, tag) {
        (Some(severity), _) => Tag::Severity(severity),
        (None, Some(tag)) => Tag::Custom(tag),
        (None, None) => Tag::Severity(Severity::Info),
    };

    tracing::debug!(%tag, "writing message");
    registry::log(message, tag).context("Failed to write log message")
}
