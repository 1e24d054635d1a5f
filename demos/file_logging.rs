//! File logging example
//!
//! Demonstrates a logger configured from JSON that appends to a log file,
//! installed as the shared logger.
//!
//! Run with: cargo run --example file_logging

use rust_level_logger::prelude::*;
use rust_level_logger::{self as log, errorf, info, infof, open_append, warn};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Rust Level Logger - File Logging Example ===\n");

    let config = LoggerConfig::from_json(
        r#"{ "level": "debug", "prefix": "demo: ", "flags": 19 }"#,
    )?;
    println!("1. Configuration:\n{}\n", config.to_json()?);

    let logger = LoggerBuilder::from_config(&config)
        .output(open_append("application.log")?)
        .build();
    let previous = log::set_logger(Arc::new(logger));

    println!("2. Logging to application.log");
    info!("Application started");
    log::debug(&["Loading configuration...".into()]);
    warn!("Using default settings for ", 2, " options");
    errorf!("Failed to load optional plugin %q", "metrics");

    for i in 1..=5 {
        infof!("Processing item %d/%d", i, 5);
    }

    // Restore standard output
    log::set_logger(previous);
    info!("Done, see application.log");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
