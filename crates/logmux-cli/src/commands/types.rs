//! List registered sink types.

use anyhow::Result;
use colored::Colorize;
use logmux_core::global_factory;

pub fn execute() -> Result<()> {
    println!("{} sink types", "Listing".green().bold());

    let factory = global_factory().read();
    for name in factory.types() {
        if name.is_empty() {
            println!("  {} (discard)", "\"\"".cyan());
        } else {
            println!("  {}", name.cyan());
        }
    }

    Ok(())
}
