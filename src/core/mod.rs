//! Core logger types

pub mod config;
pub mod error;
pub mod flags;
pub mod header;
pub mod logger;
pub mod severity;
pub mod sink;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{LoggerBuilder, LoggerConfig};
pub use error::{LoggerError, Result};
pub use flags::Flags;
pub use logger::{Logger, FATAL_EXIT_CODE};
pub use severity::{name_of, Severity, SEVERITY_NAMES};
pub use sink::Sink;
