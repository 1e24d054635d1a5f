//! Line-oriented writer
//!
//! Decorates each message with the configured prefix, timestamp and caller
//! location, then writes it to the sink as a single line. One mutex guards the
//! prefix, flags and sink together, so every line reaches the sink through a
//! single `write_all` and lines from different threads never interleave.

use super::error::{LoggerError, Result};
use super::flags::Flags;
use chrono::{DateTime, Local, NaiveDateTime, Utc};
use parking_lot::Mutex;
use std::fmt::Write as _;
use std::io::Write;
use std::panic::Location;

pub struct LineWriter {
    state: Mutex<WriterState>,
}

struct WriterState {
    prefix: String,
    flags: Flags,
    out: Box<dyn Write + Send>,
    /// Reused between lines
    buf: String,
}

impl LineWriter {
    pub fn new(out: Box<dyn Write + Send>, prefix: impl Into<String>, flags: Flags) -> Self {
        Self {
            state: Mutex::new(WriterState {
                prefix: prefix.into(),
                flags,
                out,
                buf: String::new(),
            }),
        }
    }

    pub fn set_output(&self, out: Box<dyn Write + Send>) {
        self.state.lock().out = out;
    }

    pub fn set_prefix(&self, prefix: &str) {
        let mut state = self.state.lock();
        state.prefix.clear();
        state.prefix.push_str(prefix);
    }

    pub fn set_flags(&self, flags: Flags) {
        self.state.lock().flags = flags;
    }

    pub fn prefix(&self) -> String {
        self.state.lock().prefix.clone()
    }

    pub fn flags(&self) -> Flags {
        self.state.lock().flags
    }

    /// Write one decorated line.
    ///
    /// `caller` is reported when a file flag is set; without one the location
    /// renders as `???:0`. A newline is appended unless `message` already ends
    /// with one.
    pub fn output(&self, caller: Option<&Location<'_>>, message: &str) -> Result<()> {
        let now = Utc::now();

        let mut guard = self.state.lock();
        let state = &mut *guard;
        state.buf.clear();
        format_header(&mut state.buf, &state.prefix, state.flags, now, caller);
        state.buf.push_str(message);
        if !message.ends_with('\n') {
            state.buf.push('\n');
        }

        state.out.write_all(state.buf.as_bytes()).map_err(|e| {
            LoggerError::io_operation(
                "writing log line",
                format!("sink rejected {} bytes", state.buf.len()),
                e,
            )
        })
    }

    pub fn flush(&self) -> Result<()> {
        self.state
            .lock()
            .out
            .flush()
            .map_err(|e| LoggerError::io_operation("flushing log sink", "flush failed", e))
    }
}

fn format_header(
    buf: &mut String,
    prefix: &str,
    flags: Flags,
    now: DateTime<Utc>,
    caller: Option<&Location<'_>>,
) {
    if !flags.contains(Flags::MSG_PREFIX) {
        buf.push_str(prefix);
    }

    if flags.intersects(Flags::DATE | Flags::TIME | Flags::MICROSECONDS) {
        let stamp: NaiveDateTime = if flags.contains(Flags::UTC) {
            now.naive_utc()
        } else {
            now.with_timezone(&Local).naive_local()
        };
        if flags.contains(Flags::DATE) {
            let _ = write!(buf, "{} ", stamp.format("%Y/%m/%d"));
        }
        if flags.intersects(Flags::TIME | Flags::MICROSECONDS) {
            let _ = write!(buf, "{}", stamp.format("%H:%M:%S"));
            if flags.contains(Flags::MICROSECONDS) {
                let _ = write!(buf, "{}", stamp.format("%.6f"));
            }
            buf.push(' ');
        }
    }

    if flags.intersects(Flags::SHORT_FILE | Flags::LONG_FILE) {
        let (file, line) = match caller {
            Some(location) => (location.file(), location.line()),
            None => ("???", 0),
        };
        let file = if flags.contains(Flags::SHORT_FILE) {
            short_file(file)
        } else {
            file
        };
        let _ = write!(buf, "{}:{}: ", file, line);
    }

    if flags.contains(Flags::MSG_PREFIX) {
        buf.push_str(prefix);
    }
}

fn short_file(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
