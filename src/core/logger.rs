//! Leveled logger
//!
//! `Logger` filters messages against a severity threshold and hands the
//! survivors to a [`Sink`], optionally naming the severity ahead of the
//! prefix when [`Flags::PRECEDENCY`] is set on the sink.
//!
//! Thresholds are plain integers and are never range checked: a value below
//! `Off` admits nothing, a value above `All` admits every severity.

use super::{error::Result, flags::Flags, severity::Severity, sink::Sink};
use parking_lot::RwLock;
use std::fmt;
use std::io::Write;
use std::process;
use std::sync::Arc;

/// Exit status used by the fatal tier.
pub const FATAL_EXIT_CODE: i32 = 1;

pub struct Logger {
    priority: RwLock<i32>,
    prefix: RwLock<String>,
    sink: Arc<Sink>,
}

/// Operands joined by single spaces, for the `*ln` family.
struct Spaced<'a>(&'a [&'a dyn fmt::Display]);

impl fmt::Display for Spaced<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, value) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

impl Logger {
    /// Create a logger writing to `out`.
    ///
    /// Neither `flags` nor `priority` is validated.
    ///
    /// # Example
    ///
    /// ```
    /// use journal::{Flags, Logger, Severity};
    ///
    /// let logger = Logger::new(std::io::stderr(), "app: ", Flags::STD, Severity::Info);
    /// logger.info("ready");
    /// ```
    #[must_use]
    pub fn new(
        out: impl Write + Send + 'static,
        prefix: impl Into<String>,
        flags: Flags,
        priority: impl Into<i32>,
    ) -> Self {
        let prefix = prefix.into();
        let sink = Sink::new(out, prefix.clone(), flags);
        Self {
            priority: RwLock::new(priority.into()),
            prefix: RwLock::new(prefix),
            sink: Arc::new(sink),
        }
    }

    /// Create a logger on a shared sink, adopting the sink's current prefix.
    #[must_use]
    pub fn with_sink(sink: Arc<Sink>, priority: impl Into<i32>) -> Self {
        Self {
            priority: RwLock::new(priority.into()),
            prefix: RwLock::new(sink.prefix()),
            sink,
        }
    }

    pub fn sink(&self) -> &Arc<Sink> {
        &self.sink
    }

    /// Replace the base prefix, here and on the sink.
    pub fn set_prefix(&self, prefix: impl Into<String>) {
        let prefix = prefix.into();
        *self.prefix.write() = prefix.clone();
        self.sink.set_prefix(prefix);
    }

    /// The base prefix, without any severity decoration.
    pub fn prefix(&self) -> String {
        self.prefix.read().clone()
    }

    pub fn priority(&self) -> i32 {
        *self.priority.read()
    }

    pub fn set_priority(&self, priority: impl Into<i32>) {
        *self.priority.write() = priority.into();
    }

    /// Set the threshold by severity name, ignoring case.
    ///
    /// On an unknown name the threshold is left as it was.
    ///
    /// ```
    /// use journal::{Flags, Logger, Severity};
    ///
    /// let logger = Logger::new(std::io::sink(), "", Flags::empty(), Severity::Info);
    /// logger.set_priority_string("debug").unwrap();
    /// assert_eq!(logger.priority(), Severity::Debug.value());
    ///
    /// assert!(logger.set_priority_string("verbose").is_err());
    /// assert_eq!(logger.priority(), Severity::Debug.value());
    /// ```
    pub fn set_priority_string(&self, name: &str) -> Result<()> {
        let severity: Severity = name.parse()?;
        self.set_priority(severity);
        Ok(())
    }

    pub fn flags(&self) -> Flags {
        self.sink.flags()
    }

    pub fn set_flags(&self, flags: Flags) {
        self.sink.set_flags(flags);
    }

    /// Whether a message of `severity` passes the current threshold.
    #[inline]
    pub fn enabled(&self, severity: Severity) -> bool {
        severity.value() <= *self.priority.read()
    }

    pub fn flush(&self) -> Result<()> {
        self.sink.flush()
    }

    /// Emit `message` at `severity` if the threshold admits it.
    ///
    /// This form takes a single operand. Several operands go through
    /// [`logf`](Self::logf) (or the macros) to be formatted together, or
    /// through [`logln`](Self::logln) to be joined by single spaces. The same
    /// holds for the `error`..`trace`, `fatal` and `panic` families.
    ///
    /// ```
    /// use journal::{Flags, Logger, Severity};
    ///
    /// let logger = Logger::new(std::io::stderr(), "", Flags::empty(), Severity::Info);
    /// logger.log(Severity::Info, "listening");
    /// logger.logf(Severity::Info, format_args!("port {}", 8080));
    /// logger.logln(Severity::Info, &[&"port", &8080]);
    /// ```
    #[track_caller]
    pub fn log(&self, severity: Severity, message: impl fmt::Display) {
        if self.enabled(severity) {
            self.write_decorated(severity, format_args!("{}", message));
        }
    }

    #[track_caller]
    pub fn logf(&self, severity: Severity, args: fmt::Arguments<'_>) {
        if self.enabled(severity) {
            self.write_decorated(severity, args);
        }
    }

    #[track_caller]
    pub fn logln(&self, severity: Severity, values: &[&dyn fmt::Display]) {
        if self.enabled(severity) {
            self.write_decorated(severity, format_args!("{}", Spaced(values)));
        }
    }

    /// Write one line unconditionally. No lock is held while `args` is
    /// formatted, and the sink decides the decoration from its own flags.
    #[track_caller]
    fn write_decorated(&self, severity: Severity, args: fmt::Arguments<'_>) {
        let prefix = self.prefix.read().clone();

        if let Err(e) = self.sink.output_at(severity, &prefix, args) {
            eprintln!("[LOGGER ERROR] Failed to write {} line: {}", severity, e);
        }
    }

    fn exit(&self) -> ! {
        if let Err(e) = self.sink.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush before exit: {}", e);
        }
        process::exit(FATAL_EXIT_CODE)
    }

    #[track_caller]
    fn abort_with(&self, message: String) -> ! {
        if let Err(e) = self.sink.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush before panic: {}", e);
        }
        panic!("{}", message)
    }

    // Fatal tier: never filtered, always decorated as FATAL.

    /// Write `message` and terminate the process with status 1.
    ///
    /// Single operand, as with [`log`](Self::log).
    #[track_caller]
    pub fn fatal(&self, message: impl fmt::Display) -> ! {
        self.write_decorated(Severity::Fatal, format_args!("{}", message));
        self.exit()
    }

    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.write_decorated(Severity::Fatal, args);
        self.exit()
    }

    #[track_caller]
    pub fn fatalln(&self, values: &[&dyn fmt::Display]) -> ! {
        self.write_decorated(Severity::Fatal, format_args!("{}", Spaced(values)));
        self.exit()
    }

    /// Write `message` and panic with it.
    #[track_caller]
    pub fn panic(&self, message: impl fmt::Display) -> ! {
        let message = message.to_string();
        self.write_decorated(Severity::Fatal, format_args!("{}", message));
        self.abort_with(message)
    }

    #[track_caller]
    pub fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        let message = args.to_string();
        self.write_decorated(Severity::Fatal, format_args!("{}", message));
        self.abort_with(message)
    }

    #[track_caller]
    pub fn panicln(&self, values: &[&dyn fmt::Display]) -> ! {
        let message = Spaced(values).to_string();
        self.write_decorated(Severity::Fatal, format_args!("{}", message));
        self.abort_with(message)
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.log(Severity::Error, message);
    }

    #[inline]
    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.logf(Severity::Error, args);
    }

    #[inline]
    #[track_caller]
    pub fn errorln(&self, values: &[&dyn fmt::Display]) {
        self.logln(Severity::Error, values);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl fmt::Display) {
        self.log(Severity::Warn, message);
    }

    #[inline]
    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.logf(Severity::Warn, args);
    }

    #[inline]
    #[track_caller]
    pub fn warnln(&self, values: &[&dyn fmt::Display]) {
        self.logln(Severity::Warn, values);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.log(Severity::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.logf(Severity::Info, args);
    }

    #[inline]
    #[track_caller]
    pub fn infoln(&self, values: &[&dyn fmt::Display]) {
        self.logln(Severity::Info, values);
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(Severity::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.logf(Severity::Debug, args);
    }

    #[inline]
    #[track_caller]
    pub fn debugln(&self, values: &[&dyn fmt::Display]) {
        self.logln(Severity::Debug, values);
    }

    #[inline]
    #[track_caller]
    pub fn trace(&self, message: impl fmt::Display) {
        self.log(Severity::Trace, message);
    }

    #[inline]
    #[track_caller]
    pub fn tracef(&self, args: fmt::Arguments<'_>) {
        self.logf(Severity::Trace, args);
    }

    #[inline]
    #[track_caller]
    pub fn traceln(&self, values: &[&dyn fmt::Display]) {
        self.logln(Severity::Trace, values);
    }
}

impl Default for Logger {
    /// Standard error, no prefix, date and time, threshold `Info`.
    fn default() -> Self {
        Self::new(std::io::stderr(), "", Flags::STD, Severity::Info)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("priority", &*self.priority.read())
            .field("prefix", &*self.prefix.read())
            .field("sink", &self.sink)
            .finish()
    }
}
