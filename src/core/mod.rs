//! Core logger types and traits

pub mod config;
pub mod error;
pub mod flags;
pub mod level;
pub mod line_writer;
pub mod logger;
pub mod printf;
pub mod value;

pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use flags::Flags;
pub use level::{to_level, Level, LevelInput, DEFAULT_LEVEL};
pub use line_writer::LineWriter;
pub use logger::{DefaultLogger, ExitHook, Logger, LoggerBuilder, Message};
pub use printf::sprintf;
pub use value::{sprint, Value};
