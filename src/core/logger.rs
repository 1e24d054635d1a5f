//! Logger capability and the default implementation

use super::{
    config::LoggerConfig,
    error::Result,
    flags::Flags,
    level::Level,
    line_writer::LineWriter,
    printf,
    value::{self, Value},
};
use std::io::Write;
use std::panic::Location;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Called with the exit status after a FATAL line has been written.
pub type ExitHook = Arc<dyn Fn(i32) + Send + Sync>;

/// Body of a log call before it is rendered.
#[derive(Debug, Clone, Copy)]
pub enum Message<'a> {
    /// Arguments joined by [`value::sprint`] rules.
    Args(&'a [Value]),
    /// A printf-style template and its arguments.
    Format(&'a str, &'a [Value]),
}

impl Message<'_> {
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        match *self {
            Message::Args(args) => value::sprint_into(out, args),
            Message::Format(template, args) => printf::sprintf_into(out, template, args),
        }
    }
}

/// A leveled logger.
///
/// Implementations decide filtering, formatting and where lines go. Only
/// [`Logger::log`] and the setters are required; the leveled methods forward
/// to `log` with the location of their caller.
///
/// All methods take `&self` so one instance can be shared behind an `Arc`.
pub trait Logger: Send + Sync {
    fn log(&self, level: Level, message: Message<'_>, caller: &'static Location<'static>);

    /// Calls below `level` are dropped.
    fn set_level(&self, level: Level);
    fn set_output(&self, output: Box<dyn Write + Send>);
    fn set_prefix(&self, prefix: &str);
    fn set_flags(&self, flags: Flags);

    #[track_caller]
    fn debug(&self, args: &[Value]) {
        self.log(Level::DEBUG, Message::Args(args), Location::caller());
    }

    #[track_caller]
    fn info(&self, args: &[Value]) {
        self.log(Level::INFO, Message::Args(args), Location::caller());
    }

    #[track_caller]
    fn warn(&self, args: &[Value]) {
        self.log(Level::WARN, Message::Args(args), Location::caller());
    }

    #[track_caller]
    fn error(&self, args: &[Value]) {
        self.log(Level::ERROR, Message::Args(args), Location::caller());
    }

    /// Logs at FATAL; the default logger then exits the process with status 1.
    #[track_caller]
    fn fatal(&self, args: &[Value]) {
        self.log(Level::FATAL, Message::Args(args), Location::caller());
    }

    #[track_caller]
    fn debugf(&self, format: &str, args: &[Value]) {
        self.log(Level::DEBUG, Message::Format(format, args), Location::caller());
    }

    #[track_caller]
    fn infof(&self, format: &str, args: &[Value]) {
        self.log(Level::INFO, Message::Format(format, args), Location::caller());
    }

    #[track_caller]
    fn warnf(&self, format: &str, args: &[Value]) {
        self.log(Level::WARN, Message::Format(format, args), Location::caller());
    }

    #[track_caller]
    fn errorf(&self, format: &str, args: &[Value]) {
        self.log(Level::ERROR, Message::Format(format, args), Location::caller());
    }

    /// Logs at FATAL; the default logger then exits the process with status 1.
    #[track_caller]
    fn fatalf(&self, format: &str, args: &[Value]) {
        self.log(Level::FATAL, Message::Format(format, args), Location::caller());
    }
}

/// Level filter in front of a [`LineWriter`].
///
/// Lines are `<tag><body>` where the tag is the level's bracketed name, for
/// example `[WARN ] disk almost full`. Sink errors are ignored: a failed log
/// write never reaches the caller.
pub struct DefaultLogger {
    level: AtomicI64,
    writer: LineWriter,
    exit_hook: ExitHook,
}

impl DefaultLogger {
    /// INFO level, standard output, [`Flags::DEFAULT`], empty prefix.
    #[must_use]
    pub fn new() -> Self {
        LoggerBuilder::new().build()
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Build a logger writing to standard output from `config`.
    #[must_use]
    pub fn from_config(config: &LoggerConfig) -> Self {
        LoggerBuilder::from_config(config).build()
    }

    pub fn level(&self) -> Level {
        Level::new(self.level.load(Ordering::Relaxed))
    }

    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.level()
    }

    pub fn prefix(&self) -> String {
        self.writer.prefix()
    }

    pub fn flags(&self) -> Flags {
        self.writer.flags()
    }

    pub fn flush(&self) -> Result<()> {
        self.writer.flush()
    }
}

impl Default for DefaultLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for DefaultLogger {
    fn log(&self, level: Level, message: Message<'_>, caller: &'static Location<'static>) {
        if !self.is_enabled(level) {
            return;
        }

        let mut line = level.tag().into_owned();
        message.render_into(&mut line);
        let _ = self.writer.output(Some(caller), &line);

        if level == Level::FATAL {
            let _ = self.writer.flush();
            (self.exit_hook)(1);
        }
    }

    fn set_level(&self, level: Level) {
        self.level.store(level.value(), Ordering::Relaxed);
    }

    fn set_output(&self, output: Box<dyn Write + Send>) {
        self.writer.set_output(output);
    }

    fn set_prefix(&self, prefix: &str) {
        self.writer.set_prefix(prefix);
    }

    fn set_flags(&self, flags: Flags) {
        self.writer.set_flags(flags);
    }
}

/// Builder for constructing a [`DefaultLogger`] with a fluent API
///
/// # Example
/// ```
/// use rust_level_logger::prelude::*;
///
/// let logger = DefaultLogger::builder()
///     .level(Level::DEBUG)
///     .output(std::io::stderr())
///     .prefix("worker: ")
///     .flags(Flags::STD | Flags::MSG_PREFIX)
///     .build();
///
/// logger.infof("started %d threads", &[4.into()]);
/// ```
pub struct LoggerBuilder {
    level: Level,
    output: Option<Box<dyn Write + Send>>,
    prefix: String,
    flags: Flags,
    exit_hook: Option<ExitHook>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            level: Level::INFO,
            output: None,
            prefix: String::new(),
            flags: Flags::DEFAULT,
            exit_hook: None,
        }
    }

    /// Start from the level, prefix and flags of `config`.
    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::new()
            .level(config.level)
            .prefix(config.prefix.clone())
            .flags(config.flags)
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Write to `output` instead of standard output.
    #[must_use = "builder methods return a new value"]
    pub fn output<W: Write + Send + 'static>(mut self, output: W) -> Self {
        self.output = Some(Box::new(output));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    /// Replace the process exit performed after a FATAL line.
    ///
    /// The hook receives the exit status (always 1). If it returns, the
    /// logging call returns normally.
    #[must_use = "builder methods return a new value"]
    pub fn exit_hook(mut self, hook: ExitHook) -> Self {
        self.exit_hook = Some(hook);
        self
    }

    pub fn build(self) -> DefaultLogger {
        let output: Box<dyn Write + Send> = match self.output {
            Some(output) => output,
            None => Box::new(std::io::stdout()),
        };
        let exit_hook: ExitHook = match self.exit_hook {
            Some(hook) => hook,
            None => Arc::new(exit_process),
        };
        DefaultLogger {
            level: AtomicI64::new(self.level.value()),
            writer: LineWriter::new(output, self.prefix, self.flags),
            exit_hook,
        }
    }
}

fn exit_process(code: i32) {
    std::process::exit(code)
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
