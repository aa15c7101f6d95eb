//! Basic logger usage example
//!
//! Demonstrates message composition, threshold changes, and rank filtering
//! against a stdout-backed logger.
//!
//! Run with: cargo run --example basic_usage

use ranklog::prelude::*;
use ranklog::{info_line, warning_line};

fn main() {
    println!("=== ranklog - Basic Usage Example ===\n");

    let mut logger = Logger::builder()
        .threshold(Level::Debug)
        .to_writer(Box::new(std::io::stdout()));

    println!("1. Messages at different levels:");
    logger.fatal().append("this is a fatal message").newline_and_flush();
    logger.error().append("this is an error message").newline_and_flush();
    logger.warning().append("this is a warning message").newline_and_flush();
    logger.info().append("this is an info message").newline_and_flush();
    logger.debug().append("this is a debug message").newline_and_flush();

    println!("\n2. Composing a message from parts:");
    logger
        .info()
        .append("read ")
        .append(128)
        .append(" records in ")
        .append_width(42, 6)
        .append(" ms (flags 0x")
        .append_hex(0b1011u32)
        .append(")")
        .newline_and_flush();

    println!("\n3. Threshold set to WARNING - info and debug won't show:");
    logger.set_threshold(Level::Warning);
    logger.info().append("info message (hidden)").newline_and_flush();
    logger.debug().append("debug message (hidden)").newline_and_flush();
    logger.warning().append("warning message (visible)").newline_and_flush();

    println!("\n4. Line macros:");
    logger.set_threshold(Level::Info);
    info_line!(logger, "processed {} items", 42);
    warning_line!(logger, "retry {} of {}", 1, 3);

    println!("\n5. Rank filtering (rank 0, inverted-membership set filter):");
    // Listing our own rank in the set DISABLES output; this matches the
    // historical behavior on purpose.
    logger.enable_for_single(0);
    logger.info().append("silenced for rank 0").newline_and_flush();
    logger.enable_for_all();
    logger.info().append("enabled again for all ranks").newline_and_flush();

    println!("\n=== Example completed successfully! ===");
}
