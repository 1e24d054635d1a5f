//! # Rust Level Logger
//!
//! A small leveled logging facade: five severities, a default logger that
//! writes decorated lines to any `io::Write` sink, and process-wide
//! functions that forward to a swappable shared logger.
//!
//! ## Features
//!
//! - **Levels**: DEBUG < INFO < WARN < ERROR < FATAL, with loose coercion
//!   from names and integers
//! - **Two call styles**: joined arguments (`info`) and printf templates (`infof`)
//! - **Line decoration**: prefix, date, time, microseconds and caller `file:line`
//! - **Swappable**: any [`Logger`] implementation can back the facade
//! - **FATAL exits**: the line is written and flushed, then the process exits with status 1
//!
//! ## Quick start
//!
//! ```no_run
//! use rust_level_logger::{self as log, info, warnf, Flags};
//!
//! log::set_level("debug");
//! log::set_flags(Flags::STD | Flags::SHORT_FILE);
//!
//! info!("service ready on port ", 8080);
//! warnf!("queue at %d%% capacity", 85);
//! ```
//!
//! Each line is `<prefix><date> <time> <file>:<line>: <tag><message>`:
//!
//! ```text
//! 2024/03/01 12:30:05 main.rs:7: [INFO ] service ready on port 8080
//! ```

pub mod core;
pub mod global;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        to_level, DefaultLogger, ExitHook, Flags, Level, LevelInput, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, Message, Result, Value, DEFAULT_LEVEL,
    };
    pub use crate::sinks::MemorySink;
}

pub use crate::core::{
    sprint, sprintf, to_level, DefaultLogger, ExitHook, Flags, Level, LevelInput, LineWriter,
    Logger, LoggerBuilder, LoggerConfig, LoggerError, Message, Result, Value, DEFAULT_LEVEL,
};
pub use global::{
    debug, debugf, default_logger, error, errorf, fatal, fatalf, info, infof, set_flags,
    set_level, set_logger, set_output, set_prefix, warn, warnf,
};
pub use sinks::{open_append, MemorySink};
