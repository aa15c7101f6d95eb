//! File logging example
//!
//! Demonstrates an owned file sink with the per-rank naming convention and
//! the process-wide registry.
//!
//! Run with: cargo run --example file_logging

use ranklog::prelude::*;
use ranklog::registry;

fn main() -> Result<()> {
    println!("=== ranklog - File Logging Example ===\n");

    // Rank 2 of an imagined four-worker job: opens "application_R2.log".
    let logger = Logger::builder()
        .threshold(Level::Info)
        .rank(2)
        .to_file("application")?;
    println!(
        "1. Logging to {}",
        logger.file_path().expect("owned file sink").display()
    );

    registry::init(logger)?;

    registry::with(|log| {
        log.info().append("application started").newline_and_flush();
        log.info().append("configuration loaded").newline_and_flush();
        log.warning()
            .append("using default settings for some options")
            .newline_and_flush();

        for i in 1..=5 {
            log.info()
                .append("processing item ")
                .append(i)
                .append("/5")
                .newline_and_flush();
        }

        log.error().append("failed to load optional plugin").newline_and_flush();
        log.info().append("shutting down").newline_and_flush();
    });

    // Explicit teardown: the file sink is flushed and closed here.
    let logger = registry::shutdown().expect("logger installed above");
    drop(logger);
    println!("2. Log file closed. Inspect application_R2.log for the output.");

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
