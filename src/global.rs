//! Process-wide logger
//!
//! The functions here forward to a single shared [`Logger`]. It starts out as
//! [`DefaultLogger::new()`]: INFO level, standard output, [`Flags::DEFAULT`]
//! and no prefix.
//!
//! Configure it ([`set_level`], [`set_output`], [`set_prefix`], [`set_flags`])
//! or swap it out ([`set_logger`]) while the program starts up, before other
//! threads log. Doing so later is memory safe but racy: calls already in
//! flight finish on the old settings or the old logger.
//!
//! ```no_run
//! use rust_level_logger as log;
//!
//! log::set_level("debug");
//! log::set_prefix("worker: ");
//!
//! log::info(&["listening on port ".into(), 8080.into()]);
//! log::warnf("%d of %d workers busy", &[7.into(), 8.into()]);
//! ```

use crate::core::{to_level, DefaultLogger, Flags, LevelInput, Logger, Value};
use parking_lot::RwLock;
use std::io::Write;
use std::sync::{Arc, LazyLock};

static LOGGER: LazyLock<RwLock<Arc<dyn Logger>>> =
    LazyLock::new(|| RwLock::new(Arc::new(DefaultLogger::new())));

/// The read lock is released before logging, so a FATAL exit hook or a
/// sink that logs cannot deadlock against [`set_logger`].
fn current() -> Arc<dyn Logger> {
    Arc::clone(&LOGGER.read())
}

#[track_caller]
pub fn debug(args: &[Value]) {
    current().debug(args);
}

#[track_caller]
pub fn info(args: &[Value]) {
    current().info(args);
}

#[track_caller]
pub fn warn(args: &[Value]) {
    current().warn(args);
}

#[track_caller]
pub fn error(args: &[Value]) {
    current().error(args);
}

/// Log at FATAL. With the default logger the process then exits with
/// status 1.
#[track_caller]
pub fn fatal(args: &[Value]) {
    current().fatal(args);
}

#[track_caller]
pub fn debugf(format: &str, args: &[Value]) {
    current().debugf(format, args);
}

#[track_caller]
pub fn infof(format: &str, args: &[Value]) {
    current().infof(format, args);
}

#[track_caller]
pub fn warnf(format: &str, args: &[Value]) {
    current().warnf(format, args);
}

#[track_caller]
pub fn errorf(format: &str, args: &[Value]) {
    current().errorf(format, args);
}

/// Log at FATAL with a template. With the default logger the process then
/// exits with status 1.
#[track_caller]
pub fn fatalf(format: &str, args: &[Value]) {
    current().fatalf(format, args);
}

/// Set the minimum level of the shared logger.
///
/// Accepts anything [`to_level`] does, so `set_level("debug")`,
/// `set_level(3)` and `set_level(Level::WARN)` all work.
pub fn set_level(level: impl Into<LevelInput>) {
    current().set_level(to_level(level));
}

pub fn set_output<W: Write + Send + 'static>(output: W) {
    current().set_output(Box::new(output));
}

pub fn set_prefix(prefix: &str) {
    current().set_prefix(prefix);
}

pub fn set_flags(flags: Flags) {
    current().set_flags(flags);
}

/// The logger the facade currently forwards to.
pub fn default_logger() -> Arc<dyn Logger> {
    current()
}

/// Install `logger` as the shared logger and return the one it replaces.
pub fn set_logger(logger: Arc<dyn Logger>) -> Arc<dyn Logger> {
    std::mem::replace(&mut *LOGGER.write(), logger)
}
