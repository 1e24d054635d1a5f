//! Output sinks
//!
//! Any `std::io::Write + Send` value can receive log lines. These are the
//! ones that need a little help: an in-memory buffer that can be read back
//! and an append-mode log file.

pub mod file;
pub mod memory;

pub use file::open_append;
pub use memory::MemorySink;
