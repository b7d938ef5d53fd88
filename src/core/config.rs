//! Logger construction
//!
//! [`LoggerBuilder`] offers a fluent alternative to [`Logger::new`], and
//! [`LoggerConfig`] carries the same settings in a serde-friendly form so a
//! logger can be described in a configuration file.

use super::{
    error::Result,
    flags::Flags,
    logger::Logger,
    severity::Severity,
    sink::Sink,
};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::sync::Arc;

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use journal::prelude::*;
///
/// let logger = Logger::builder()
///     .writer(std::io::stdout())
///     .prefix("app: ")
///     .flags(Flags::STD | Flags::PRECEDENCY)
///     .priority(Severity::Debug)
///     .build();
///
/// assert_eq!(logger.priority(), Severity::Debug.value());
/// ```
pub struct LoggerBuilder {
    writer: Option<Box<dyn Write + Send>>,
    sink: Option<Arc<Sink>>,
    prefix: String,
    flags: Flags,
    priority: i32,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            writer: None,
            sink: None,
            prefix: String::new(),
            flags: Flags::STD,
            priority: Severity::Info.value(),
        }
    }

    /// Output destination. Defaults to standard error.
    #[must_use = "builder methods return a new value"]
    pub fn writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.writer = Some(Box::new(writer));
        self
    }

    /// Write through an existing sink. Starts from the sink's own prefix and
    /// flags; later `prefix`/`flags` calls are applied to the sink on build.
    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, sink: Arc<Sink>) -> Self {
        self.prefix = sink.prefix();
        self.flags = sink.flags();
        self.sink = Some(sink);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn priority(mut self, priority: impl Into<i32>) -> Self {
        self.priority = priority.into();
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        match self.sink {
            Some(sink) => {
                sink.set_flags(self.flags);
                sink.set_prefix(self.prefix);
                Logger::with_sink(sink, self.priority)
            }
            None => match self.writer {
                Some(writer) => Logger::new(writer, self.prefix, self.flags, self.priority),
                None => Logger::new(std::io::stderr(), self.prefix, self.flags, self.priority),
            },
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

/// Serializable logger settings.
///
/// ```
/// use journal::{Flags, LoggerConfig, Severity};
///
/// let config = LoggerConfig::from_json(
///     r#"{ "prefix": "api: ", "flags": "PRECEDENCY", "priority": "warn" }"#,
/// ).unwrap();
/// assert_eq!(config.flags, Flags::PRECEDENCY);
///
/// let logger = config.build(std::io::sink()).unwrap();
/// assert_eq!(logger.priority(), Severity::Warn.value());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub prefix: String,
    pub flags: Flags,
    /// Severity name, matched without regard to case.
    pub priority: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            flags: Flags::STD,
            priority: Severity::Info.name().to_string(),
        }
    }
}

impl LoggerConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Resolve the priority name and build a logger writing to `writer`.
    pub fn build(&self, writer: impl Write + Send + 'static) -> Result<Logger> {
        let priority: Severity = self.priority.parse()?;
        Ok(Logger::builder()
            .writer(writer)
            .prefix(self.prefix.clone())
            .flags(self.flags)
            .priority(priority)
            .build())
    }
}
