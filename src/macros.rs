//! Logging macros for ergonomic log message formatting.
//!
//! Each macro forwards `format_args!` to the matching `*f` method, so the
//! message is only formatted when the logger's threshold admits it.
//!
//! # Examples
//!
//! ```
//! use journal::prelude::*;
//! use journal::{info, warn};
//!
//! let logger = Logger::new(std::io::stderr(), "app: ", Flags::PRECEDENCY, Severity::Info);
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! warn!(logger, "{} connections pending", 12);
//! ```

/// Log a message at an explicit severity.
///
/// ```
/// # use journal::prelude::*;
/// # let logger = Logger::default();
/// use journal::log;
/// log!(logger, Severity::Info, "Simple message");
/// log!(logger, Severity::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.logf($severity, format_args!($($arg)+))
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(format_args!($($arg)+))
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warnf(format_args!($($arg)+))
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(format_args!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(format_args!($($arg)+))
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $logger.tracef(format_args!($($arg)+))
    };
}

/// Log a fatal message and exit the process. Not subject to the threshold.
///
/// ```no_run
/// # use journal::prelude::*;
/// # let logger = Logger::default();
/// use journal::fatal;
/// fatal!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(format_args!($($arg)+))
    };
}

/// Log a fatal message and panic with it. Not subject to the threshold.
#[macro_export]
macro_rules! log_panic {
    ($logger:expr, $($arg:tt)+) => {
        $logger.panicf(format_args!($($arg)+))
    };
}
