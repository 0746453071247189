//! Concurrent logging demonstration.
//!
//! Every worker logs one message per severity used by typical services, plus
//! a custom-tagged one, `iterations` times, pausing between calls.

use anyhow::{anyhow, Result};
use colored::Colorize;
use logmux_core::{registry, Severity, Tag};
use std::thread;
use std::time::Duration;

/// Tags logged by each worker in one round.
const ROUND: [Tag<'static>; 6] = [
    Tag::Severity(Severity::Error),
    Tag::Severity(Severity::Warn),
    Tag::Severity(Severity::Info),
    Tag::Severity(Severity::Debug),
    Tag::Severity(Severity::Trace),
    Tag::Custom("User Defined"),
];

pub fn execute(threads: usize, iterations: usize, pause_ms: u64) -> Result<()> {
    // Build the logger before spawning so a bad configuration fails once.
    registry::logger()?;

    let pause = Duration::from_millis(pause_ms);
    tracing::info!(threads, iterations, "starting demo workers");

    let handles: Vec<_> = (0..threads)
        .map(|id| thread::spawn(move || run_worker(id, iterations, pause)))
        .collect();

    let mut failures = 0;
    for (id, handle) in handles.into_iter().enumerate() {
        match handle.join() {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                failures += 1;
                eprintln!("  {} worker {}: {}", "✗".red(), id, e);
            }
            Err(_) => {
                failures += 1;
                eprintln!("  {} worker {} panicked", "✗".red(), id);
            }
        }
    }

    if failures > 0 {
        return Err(anyhow!("{} of {} workers failed", failures, threads));
    }

    eprintln!(
        "{} {} workers wrote {} lines",
        "✓".green(),
        threads,
        threads * iterations * ROUND.len()
    );
    Ok(())
}

fn run_worker(id: usize, iterations: usize, pause: Duration) -> logmux_core::Result<()> {
    let message = format!("Thread ID: {}", id);

    for _ in 0..iterations {
        for tag in ROUND {
            registry::log(&message, tag)?;
            thread::sleep(pause);
        }
    }

    Ok(())
}
