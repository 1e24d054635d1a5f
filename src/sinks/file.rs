//! Log file sink

use crate::core::{LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::path::Path;

/// Open `path` for appending, creating it if needed.
///
/// The file is unbuffered: each log line is handed to the OS as it is
/// written.
///
/// ```no_run
/// use rust_level_logger::sinks::open_append;
///
/// let file = open_append("/var/log/app.log")?;
/// rust_level_logger::set_output(file);
/// # Ok::<(), rust_level_logger::LoggerError>(())
/// ```
pub fn open_append(path: impl AsRef<Path>) -> Result<File> {
    let path = path.as_ref();
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LoggerError::io_operation("opening log file", path.display().to_string(), e))
}
