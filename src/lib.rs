//! # Journal
//!
//! A leveled logging facade: a line logger wrapped with a severity
//! threshold, a configurable prefix and named severities from `Fatal`
//! through `Trace`.
//!
//! ## Features
//!
//! - **Severity filtering**: a message is written only when its severity is
//!   at or below the logger's threshold, which may be set by name
//! - **Severity names in the prefix**: with [`Flags::PRECEDENCY`] every line
//!   starts with `"<SEVERITY> "` ahead of the prefix
//! - **Line flags**: date, time, microseconds and caller file/line headers
//! - **Thread safe**: loggers can be shared and reconfigured across threads
//!
//! ```
//! use journal::prelude::*;
//!
//! let logger = Logger::new(std::io::stderr(), "app: ", Flags::PRECEDENCY, Severity::Warn);
//! logger.info("not written");
//! logger.warn("low disk"); // WARN app: low disk
//! ```

pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        Flags, Logger, LoggerBuilder, LoggerConfig, LoggerError, Result, Severity, Sink,
    };
}

pub use core::{
    name_of, Flags, Logger, LoggerBuilder, LoggerConfig, LoggerError, Result, Severity, Sink,
    FATAL_EXIT_CODE, SEVERITY_NAMES,
};
