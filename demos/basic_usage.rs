//! Basic logger usage example
//!
//! Demonstrates threshold filtering, severity-decorated prefixes and
//! configuring the threshold by name.
//!
//! Run with: cargo run --example basic_usage

use journal::prelude::*;
use journal::{info, warn};

fn main() -> Result<()> {
    println!("=== Journal - Basic Usage Example ===\n");

    let logger = Logger::new(
        std::io::stdout(),
        "demo: ",
        Flags::STD | Flags::SHORT_FILE | Flags::PRECEDENCY,
        Severity::Trace,
    );

    println!("1. Logging at every filtered severity:");
    logger.error("This is an error message");
    logger.warn("This is a warning message");
    logger.info("This is an info message");
    logger.debug("This is a debug message");
    logger.trace("This is a trace message");

    println!("\n2. Raising the threshold by name:");
    logger.set_priority_string("warn")?;
    logger.info("Info message (hidden)");
    warn!(logger, "Disk usage at {}%", 91);

    println!("\n3. Plain prefix without severity names:");
    logger.set_flags(Flags::STD);
    logger.set_prefix("plain: ");
    logger.error("Error message without a severity name");
    info!(logger, "Still hidden: {}", "threshold is WARN");

    println!("\n4. Unknown severity names are rejected:");
    if let Err(e) = logger.set_priority_string("verbose") {
        println!("   {}", e);
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
