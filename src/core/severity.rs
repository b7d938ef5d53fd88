//! Severity definitions
//!
//! Severities are ordered by ascending verbosity. A logger admits a message
//! when the message's severity value is less than or equal to its threshold,
//! so `Off` admits nothing and `All` admits everything.

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display names indexed by severity value.
pub const SEVERITY_NAMES: [&str; 8] = [
    "OFF", "FATAL", "ERROR", "WARN", "INFO", "DEBUG", "TRACE", "ALL",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(i32)]
pub enum Severity {
    /// Threshold-only sentinel: suppress everything.
    Off = 0,
    Fatal = 1,
    Error = 2,
    Warn = 3,
    Info = 4,
    Debug = 5,
    Trace = 6,
    /// Threshold-only sentinel: permit everything.
    All = 7,
}

impl Severity {
    /// Every severity, in ascending value order.
    pub const LEVELS: [Severity; 8] = [
        Severity::Off,
        Severity::Fatal,
        Severity::Error,
        Severity::Warn,
        Severity::Info,
        Severity::Debug,
        Severity::Trace,
        Severity::All,
    ];

    #[inline]
    pub const fn value(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> &'static str {
        SEVERITY_NAMES[self as usize]
    }

    /// Map a raw threshold value back to a named severity.
    pub fn from_value(value: i32) -> Option<Self> {
        usize::try_from(value)
            .ok()
            .and_then(|idx| Self::LEVELS.get(idx).copied())
    }
}

/// Display name for a raw severity value, if it is one of the eight defined.
pub fn name_of(value: i32) -> Option<&'static str> {
    Severity::from_value(value).map(Severity::name)
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Severity> for i32 {
    fn from(severity: Severity) -> Self {
        severity.value()
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_uppercase();
        SEVERITY_NAMES
            .iter()
            .position(|name| *name == wanted)
            .map(|idx| Self::LEVELS[idx])
            .ok_or_else(|| LoggerError::unknown_priority(wanted))
    }
}
