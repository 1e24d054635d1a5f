//! Logging macros that convert their arguments into [`Value`](crate::Value)s.
//!
//! The leveled macros forward to the process-wide logger:
//!
//! ```no_run
//! use rust_level_logger::{info, warnf};
//!
//! let port = 8080;
//! info!("listening on port ", port);
//! warnf!("%d of %d workers busy", 7, 8);
//! ```
//!
//! [`log!`](crate::log) and [`logf!`](crate::logf) take an explicit logger
//! and level instead:
//!
//! ```
//! use rust_level_logger::prelude::*;
//! use rust_level_logger::{log, logf};
//!
//! let sink = MemorySink::new();
//! let logger = DefaultLogger::builder()
//!     .output(sink.clone())
//!     .flags(Flags::NONE)
//!     .build();
//!
//! log!(logger, Level::INFO, "cache size ", 128, " entries");
//! logf!(logger, Level::ERROR, "code %d: %s", 500, "internal");
//!
//! assert_eq!(
//!     sink.contents(),
//!     "[INFO ] cache size 128 entries\n[ERROR] code 500: internal\n"
//! );
//! ```

/// Log `args` at `level` through an explicit logger.
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr $(, $arg:expr)* $(,)?) => {{
        use $crate::Logger as _;
        $logger.log(
            $level,
            $crate::Message::Args(&[$($crate::Value::from($arg)),*]),
            ::std::panic::Location::caller(),
        )
    }};
}

/// Log a printf-style template at `level` through an explicit logger.
#[macro_export]
macro_rules! logf {
    ($logger:expr, $level:expr, $format:expr $(, $arg:expr)* $(,)?) => {{
        use $crate::Logger as _;
        $logger.log(
            $level,
            $crate::Message::Format($format, &[$($crate::Value::from($arg)),*]),
            ::std::panic::Location::caller(),
        )
    }};
}

/// Log at DEBUG through the process-wide logger.
#[macro_export]
macro_rules! debug {
    ($($arg:expr),* $(,)?) => {
        $crate::global::debug(&[$($crate::Value::from($arg)),*])
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:expr),* $(,)?) => {
        $crate::global::info(&[$($crate::Value::from($arg)),*])
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:expr),* $(,)?) => {
        $crate::global::warn(&[$($crate::Value::from($arg)),*])
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:expr),* $(,)?) => {
        $crate::global::error(&[$($crate::Value::from($arg)),*])
    };
}

/// Log at FATAL through the process-wide logger, which exits the process
/// unless it has been replaced.
#[macro_export]
macro_rules! fatal {
    ($($arg:expr),* $(,)?) => {
        $crate::global::fatal(&[$($crate::Value::from($arg)),*])
    };
}

/// Log a template at DEBUG through the process-wide logger.
///
/// ```no_run
/// use rust_level_logger::debugf;
///
/// debugf!("retry %d of %d after %.1fs", 2, 5, 0.5);
/// ```
#[macro_export]
macro_rules! debugf {
    ($format:expr $(, $arg:expr)* $(,)?) => {
        $crate::global::debugf($format, &[$($crate::Value::from($arg)),*])
    };
}

#[macro_export]
macro_rules! infof {
    ($format:expr $(, $arg:expr)* $(,)?) => {
        $crate::global::infof($format, &[$($crate::Value::from($arg)),*])
    };
}

#[macro_export]
macro_rules! warnf {
    ($format:expr $(, $arg:expr)* $(,)?) => {
        $crate::global::warnf($format, &[$($crate::Value::from($arg)),*])
    };
}

#[macro_export]
macro_rules! errorf {
    ($format:expr $(, $arg:expr)* $(,)?) => {
        $crate::global::errorf($format, &[$($crate::Value::from($arg)),*])
    };
}

#[macro_export]
macro_rules! fatalf {
    ($format:expr $(, $arg:expr)* $(,)?) => {
        $crate::global::fatalf($format, &[$($crate::Value::from($arg)),*])
    };
}
