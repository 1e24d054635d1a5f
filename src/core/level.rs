//! Log level definitions and level coercion

use super::error::LoggerError;
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Severity of a log line.
///
/// Levels are plain integers: the five named constants cover `0..=4`, but any
/// other value is still a valid level. It orders like its integer and renders
/// as `[Level(n)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Level(i64);

/// Level used by [`to_level`] when the input names no level.
pub const DEFAULT_LEVEL: Level = Level::WARN;

const TAGS: [&str; 5] = ["[DEBUG] ", "[INFO ] ", "[WARN ] ", "[ERROR] ", "[FATAL] "];
const NAMES: [&str; 5] = ["DEBUG", "INFO", "WARN", "ERROR", "FATAL"];

impl Level {
    pub const DEBUG: Level = Level(0);
    pub const INFO: Level = Level(1);
    pub const WARN: Level = Level(2);
    pub const ERROR: Level = Level(3);
    pub const FATAL: Level = Level(4);

    /// The named levels, ascending.
    pub const ALL: [Level; 5] = [
        Level::DEBUG,
        Level::INFO,
        Level::WARN,
        Level::ERROR,
        Level::FATAL,
    ];

    /// Reinterpret an integer as a level. No bounds check.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Level(value)
    }

    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Whether this is one of `DEBUG..=FATAL`.
    #[must_use]
    pub const fn is_named(&self) -> bool {
        self.0 >= Level::DEBUG.0 && self.0 <= Level::FATAL.0
    }

    /// Upper-case name for the named levels.
    #[must_use]
    pub fn name(&self) -> Option<&'static str> {
        self.index().map(|i| NAMES[i])
    }

    /// The bracketed tag written in front of every message.
    ///
    /// Named levels give a fixed 8-character tag with a trailing space
    /// (`"[WARN ] "`); anything else gives `"[Level(n)]"` with none.
    #[must_use]
    pub fn tag(&self) -> Cow<'static, str> {
        match self.index() {
            Some(i) => Cow::Borrowed(TAGS[i]),
            None => Cow::Owned(format!("[Level({})]", self.0)),
        }
    }

    fn index(&self) -> Option<usize> {
        if self.is_named() {
            Some(self.0 as usize)
        } else {
            None
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        DEFAULT_LEVEL
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag())
    }
}

impl From<i64> for Level {
    fn from(value: i64) -> Self {
        Level(value)
    }
}

/// Strict parsing: unlike [`to_level`], unknown text is an error.
impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(level) = name_to_level(s) {
            return Ok(level);
        }
        s.trim()
            .parse::<i64>()
            .map(Level)
            .map_err(|_| LoggerError::invalid_level(s))
    }
}

fn name_to_level(name: &str) -> Option<Level> {
    match name.to_lowercase().as_str() {
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warning" | "warn" => Some(Level::WARN),
        "error" | "err" => Some(Level::ERROR),
        "fatal" => Some(Level::FATAL),
        _ => None,
    }
}

/// Anything that can be handed to [`to_level`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelInput {
    /// Already a level; passed through untouched.
    Level(Level),
    /// A level name, matched case-insensitively.
    Text(String),
    /// An integer reinterpreted as a level.
    Int(i64),
    /// Any other shape; always the default level.
    Other,
}

/// Coerce loosely typed input into a [`Level`].
///
/// Unsigned integers above `i64::MAX` wrap to negative levels.
///
/// ```
/// use rust_level_logger::{to_level, Level};
///
/// assert_eq!(to_level(1), Level::INFO);
/// assert_eq!(to_level("debug"), Level::DEBUG);
/// assert_eq!(to_level("Warning"), Level::WARN);
/// assert_eq!(to_level(Level::ERROR), Level::ERROR);
/// assert_eq!(to_level(true), Level::WARN);
/// ```
pub fn to_level(input: impl Into<LevelInput>) -> Level {
    match input.into() {
        LevelInput::Level(level) => level,
        LevelInput::Text(text) => name_to_level(&text).unwrap_or(DEFAULT_LEVEL),
        LevelInput::Int(value) => Level(value),
        LevelInput::Other => DEFAULT_LEVEL,
    }
}

impl From<Level> for LevelInput {
    fn from(level: Level) -> Self {
        LevelInput::Level(level)
    }
}

impl From<&str> for LevelInput {
    fn from(text: &str) -> Self {
        LevelInput::Text(text.to_string())
    }
}

impl From<String> for LevelInput {
    fn from(text: String) -> Self {
        LevelInput::Text(text)
    }
}

impl From<&String> for LevelInput {
    fn from(text: &String) -> Self {
        LevelInput::Text(text.clone())
    }
}

/// Integers become levels through `as i64`. A `u64` or `usize` above
/// `i64::MAX` wraps to a negative level, so `u64::MAX` is `Level::new(-1)`.
macro_rules! int_level_input {
    ($($t:ty),*) => {
        $(
            impl From<$t> for LevelInput {
                fn from(value: $t) -> Self {
                    LevelInput::Int(value as i64)
                }
            }
        )*
    };
}

int_level_input!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<bool> for LevelInput {
    fn from(_: bool) -> Self {
        LevelInput::Other
    }
}

impl From<()> for LevelInput {
    fn from(_: ()) -> Self {
        LevelInput::Other
    }
}

impl From<serde_json::Value> for LevelInput {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(text) => LevelInput::Text(text),
            serde_json::Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(v), _) => LevelInput::Int(v),
                (None, Some(v)) => LevelInput::Int(v as i64),
                _ => LevelInput::Other,
            },
            _ => LevelInput::Other,
        }
    }
}

/// Deserialize a level from any document shape using [`to_level`] rules.
///
/// Meant for `#[serde(deserialize_with = "...")]` on configuration fields.
pub fn deserialize_coerced<'de, D>(deserializer: D) -> Result<Level, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(to_level(value))
}
