//! Logger configuration documents
//!
//! A [`LoggerConfig`] is the serializable subset of a [`DefaultLogger`]'s
//! settings. The output sink is not part of it; pick that in code.
//!
//! ```json
//! { "level": "debug", "prefix": "api: ", "flags": 19 }
//! ```
//!
//! The level accepts the same loose input as [`to_level`]: names in any
//! case, integers, or anything else (which falls back to WARN).
//!
//! [`DefaultLogger`]: super::logger::DefaultLogger
//! [`to_level`]: super::level::to_level

use super::error::{LoggerError, Result};
use super::flags::Flags;
use super::level::Level;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    #[serde(deserialize_with = "super::level::deserialize_coerced")]
    pub level: Level,
    pub prefix: String,
    pub flags: Flags,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            prefix: String::new(),
            flags: Flags::DEFAULT,
        }
    }
}

impl LoggerConfig {
    /// Parse a JSON document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation("reading logger config", path.display().to_string(), e)
        })?;
        Self::from_json(&text)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
