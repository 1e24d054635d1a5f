//! Basic logger usage example
//!
//! Demonstrates the shared logger, both call styles and level changes.
//!
//! Run with: cargo run --example basic_usage

use rust_level_logger::{self as log, debug, info, infof, warn, warnf, Flags, Level};

fn main() {
    println!("=== Rust Level Logger - Basic Usage Example ===\n");

    println!("1. Default settings (INFO, date/time/microseconds, file:line):");
    debug!("This debug message is hidden");
    info!("Server listening on port ", 8080);
    warn!("Disk usage at ", 91, "%");

    println!("\n2. Printf-style templates:");
    infof!("%d requests in %.2fs (%s)", 1200, 3.5, "ok");
    warnf!("retrying %q after %dms", "db-primary", 250);

    println!("\n3. Lowering the level and dropping the timestamp:");
    log::set_level("debug");
    log::set_flags(Flags::SHORT_FILE);
    debug!("This debug message is visible now");

    println!("\n4. Prefix placement:");
    log::set_prefix("worker-1 ");
    info!("prefix at the start of the line");
    log::set_flags(Flags::SHORT_FILE | Flags::MSG_PREFIX);
    info!("prefix just before the message");

    println!("\n5. Calling through a logger value:");
    let logger = log::default_logger();
    logger.set_level(Level::ERROR);
    logger.warn(&["hidden below ERROR".into()]);
    logger.errorf("%s failed with code %d", &["job".into(), 3.into()]);

    println!("\n=== Example completed successfully! ===");
}
