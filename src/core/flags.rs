//! Display flags controlling line decoration
//!
//! Each set bit adds one annotation in front of the message:
//!
//! ```text
//! DATE | TIME | MICROSECONDS | SHORT_FILE
//! 2009/01/23 01:23:23.123123 main.rs:23: [INFO ] message
//! ```

use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::ops::{BitAnd, BitOr, BitOrAssign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Flags(u32);

impl Flags {
    pub const NONE: Flags = Flags(0);
    /// Local date: `2009/01/23`
    pub const DATE: Flags = Flags(1);
    /// Local time: `01:23:23`
    pub const TIME: Flags = Flags(1 << 1);
    /// Microsecond resolution: `01:23:23.123123`. Implies TIME.
    pub const MICROSECONDS: Flags = Flags(1 << 2);
    /// Full source path and line: `/a/b/c/main.rs:23`
    pub const LONG_FILE: Flags = Flags(1 << 3);
    /// Final path element and line: `main.rs:23`. Overrides LONG_FILE.
    pub const SHORT_FILE: Flags = Flags(1 << 4);
    /// Use UTC rather than the local time zone.
    pub const UTC: Flags = Flags(1 << 5);
    /// Move the prefix from the start of the line to just before the message.
    pub const MSG_PREFIX: Flags = Flags(1 << 6);

    /// Date and time.
    pub const STD: Flags = Flags(Self::DATE.0 | Self::TIME.0);
    /// What a fresh logger uses: date, time with microseconds, caller file:line.
    pub const DEFAULT: Flags = Flags(Self::STD.0 | Self::MICROSECONDS.0 | Self::SHORT_FILE.0);

    const ALL_BITS: u32 = (1 << 7) - 1;

    #[must_use]
    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// Build flags from raw bits, rejecting unknown bits.
    pub fn from_bits(bits: u32) -> Result<Self> {
        if bits & !Self::ALL_BITS != 0 {
            return Err(LoggerError::InvalidFlags(bits));
        }
        Ok(Flags(bits))
    }

    /// Build flags from raw bits, dropping unknown bits.
    #[must_use]
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Flags(bits & Self::ALL_BITS)
    }

    #[must_use]
    pub const fn contains(&self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn intersects(&self, other: Flags) -> bool {
        self.0 & other.0 != 0
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Flags {
    fn default() -> Self {
        Flags::DEFAULT
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Flags {
    type Output = Flags;

    fn bitand(self, rhs: Flags) -> Flags {
        Flags(self.0 & rhs.0)
    }
}

impl From<Flags> for u32 {
    fn from(flags: Flags) -> u32 {
        flags.0
    }
}

impl TryFrom<u32> for Flags {
    type Error = LoggerError;

    fn try_from(bits: u32) -> Result<Self> {
        Flags::from_bits(bits)
    }
}
