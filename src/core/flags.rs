//! Line formatting flags
//!
//! Bit positions are fixed so persisted or configured values stay valid.
//! The text form used by serde and [`Flags::from_names`] is the flag names
//! joined by `|`, e.g. `"DATE | TIME | PRECEDENCY"`.

use super::error::{LoggerError, Result};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Flags: u32 {
        /// The date in the local time zone: `2009/01/23`
        const DATE = 1 << 0;
        /// The time in the local time zone: `01:23:23`
        const TIME = 1 << 1;
        /// Microsecond resolution: `01:23:23.123123`. Implies `TIME`.
        const MICROSECONDS = 1 << 2;
        /// Full file name and line number: `/a/b/c/d.rs:23`
        const LONG_FILE = 1 << 3;
        /// Final file name element and line number: `d.rs:23`. Overrides `LONG_FILE`.
        const SHORT_FILE = 1 << 4;
        /// Severity name ahead of the prefix: `WARN app: ...`
        const PRECEDENCY = 1 << 5;
        /// Initial values for a standard logger.
        const STD = Self::DATE.bits() | Self::TIME.bits();
    }
}

impl Flags {
    /// Parse the text form, e.g. `"DATE | TIME"`.
    pub fn from_names(text: &str) -> Result<Self> {
        bitflags::parser::from_str::<Flags>(text)
            .map_err(|e| LoggerError::config("flags", format!("'{}': {}", text, e)))
    }

    pub fn has_timestamp(self) -> bool {
        self.intersects(Flags::DATE | Flags::TIME | Flags::MICROSECONDS)
    }

    pub fn has_location(self) -> bool {
        self.intersects(Flags::LONG_FILE | Flags::SHORT_FILE)
    }
}

impl Default for Flags {
    fn default() -> Self {
        Flags::STD
    }
}
