//! In-memory sink

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// A growable byte buffer that can be handed to a logger and read back.
///
/// Clones share the same buffer, so keep one clone and give the other to
/// [`Logger::set_output`](crate::Logger::set_output).
///
/// ```
/// use rust_level_logger::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = DefaultLogger::builder()
///     .output(sink.clone())
///     .flags(Flags::NONE)
///     .build();
///
/// logger.warn(&["disk ".into(), 93.into(), "% full".into()]);
/// assert_eq!(sink.contents(), "[WARN ] disk 93% full\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, invalid UTF-8 replaced.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.buffer.lock().clone()
    }

    /// Complete lines written so far, without their newlines.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    /// Return the contents and empty the buffer.
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.buffer.lock());
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    pub fn len(&self) -> usize {
        self.buffer.lock().len()
    }
}

impl Write for MemorySink {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(data);
        Ok(data.len())
    }

    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        self.buffer.lock().extend_from_slice(data);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_buffer() {
        let sink = MemorySink::new();
        let mut writer = sink.clone();

        writer.write_all(b"one\ntwo\n").unwrap();

        assert_eq!(sink.contents(), "one\ntwo\n");
        assert_eq!(sink.lines(), vec!["one", "two"]);
        assert_eq!(sink.len(), 8);
    }

    #[test]
    fn test_take_and_clear() {
        let sink = MemorySink::new();
        let mut writer = sink.clone();

        writer.write_all(b"first").unwrap();
        assert_eq!(sink.take(), "first");
        assert!(sink.is_empty());

        writer.write_all(b"second").unwrap();
        sink.clear();
        assert_eq!(sink.contents(), "");
    }
}
