//! Line output sink
//!
//! A `Sink` owns an output writer together with the prefix and formatting
//! flags applied to every line written through it. Each line is assembled in
//! full and handed to the writer with a single `write_all` while the sink's
//! lock is held, so lines from concurrent callers never interleave.
//!
//! The message is rendered before the lock is taken, so a `Display` impl may
//! itself log through the same sink.

use super::error::{LoggerError, Result};
use super::flags::Flags;
use super::header::{format_header, CallSite};
use super::severity::Severity;
use chrono::Local;
use parking_lot::Mutex;
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, LineWriter, Write};
use std::panic::Location;
use std::path::Path;

struct SinkState {
    prefix: String,
    flags: Flags,
    writer: Box<dyn Write + Send>,
    // Reused across lines to avoid an allocation per write.
    buf: String,
}

pub struct Sink {
    state: Mutex<SinkState>,
}

impl Sink {
    pub fn new(writer: impl Write + Send + 'static, prefix: impl Into<String>, flags: Flags) -> Self {
        Self {
            state: Mutex::new(SinkState {
                prefix: prefix.into(),
                flags,
                writer: Box::new(writer),
                buf: String::new(),
            }),
        }
    }

    pub fn stderr(prefix: impl Into<String>, flags: Flags) -> Self {
        Self::new(io::stderr(), prefix, flags)
    }

    pub fn stdout(prefix: impl Into<String>, flags: Flags) -> Self {
        Self::new(io::stdout(), prefix, flags)
    }

    /// Open (or create) `path` in append mode. Lines are flushed as they
    /// are completed.
    pub fn file(path: impl AsRef<Path>, prefix: impl Into<String>, flags: Flags) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LoggerError::io_operation("opening log file", path.display().to_string(), e)
            })?;

        Ok(Self::new(LineWriter::new(file), prefix, flags))
    }

    pub fn prefix(&self) -> String {
        self.state.lock().prefix.clone()
    }

    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.state.lock().prefix = prefix.into();
    }

    pub fn flags(&self) -> Flags {
        self.state.lock().flags
    }

    pub fn set_flags(&self, flags: Flags) {
        self.state.lock().flags = flags;
    }

    /// Write one line using the sink's own prefix.
    ///
    /// A trailing newline is added unless the message already ends with one.
    #[track_caller]
    pub fn output(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.write_line(None, None, Location::caller().into(), args)
    }

    /// Write one line with `prefix` standing in for the stored prefix.
    ///
    /// The stored prefix is left untouched.
    #[track_caller]
    pub fn output_with_prefix(&self, prefix: &str, args: fmt::Arguments<'_>) -> Result<()> {
        self.write_line(None, Some(prefix), Location::caller().into(), args)
    }

    /// Write one line for a message of `severity`, with `prefix` standing in
    /// for the stored prefix.
    ///
    /// When the sink's flags contain [`Flags::PRECEDENCY`] the severity name
    /// and a space lead the prefix. The flags are read once, under the same
    /// lock as the write, so the decoration and the header always agree.
    #[track_caller]
    pub fn output_at(
        &self,
        severity: Severity,
        prefix: &str,
        args: fmt::Arguments<'_>,
    ) -> Result<()> {
        self.write_line(Some(severity), Some(prefix), Location::caller().into(), args)
    }

    fn write_line(
        &self,
        severity: Option<Severity>,
        prefix: Option<&str>,
        site: CallSite<'_>,
        args: fmt::Arguments<'_>,
    ) -> Result<()> {
        let mut message = String::new();
        fmt::write(&mut message, args)
            .map_err(|_| LoggerError::formatter("message", "a formatting trait returned an error"))?;

        let now = Local::now();

        let mut guard = self.state.lock();
        let state = &mut *guard;

        state.buf.clear();
        if let Some(severity) = severity.filter(|_| state.flags.contains(Flags::PRECEDENCY)) {
            state.buf.push_str(severity.name());
            state.buf.push(' ');
        }
        let prefix = prefix.unwrap_or(&state.prefix);
        format_header(&mut state.buf, prefix, state.flags, &now, site);

        state.buf.push_str(&message);
        if !state.buf.ends_with('\n') {
            state.buf.push('\n');
        }

        state.writer.write_all(state.buf.as_bytes())?;
        Ok(())
    }

    pub fn flush(&self) -> Result<()> {
        self.state.lock().writer.flush()?;
        Ok(())
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("Sink")
            .field("prefix", &state.prefix)
            .field("flags", &state.flags)
            .finish_non_exhaustive()
    }
}

impl Drop for Sink {
    fn drop(&mut self) {
        // Ensure all buffered data reaches the destination
        let _ = self.state.get_mut().writer.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{FailingWriter, SharedBuffer};

    #[test]
    fn test_output_appends_newline() {
        let buffer = SharedBuffer::default();
        let sink = Sink::new(buffer.clone(), "app: ", Flags::empty());

        sink.output(format_args!("hello")).unwrap();
        sink.output(format_args!("already terminated\n")).unwrap();

        assert_eq!(buffer.contents(), "app: hello\napp: already terminated\n");
    }

    #[test]
    fn test_prefix_override_leaves_stored_prefix() {
        let buffer = SharedBuffer::default();
        let sink = Sink::new(buffer.clone(), "app: ", Flags::empty());

        sink.output_with_prefix("INFO app: ", format_args!("one")).unwrap();
        sink.output(format_args!("two")).unwrap();

        assert_eq!(sink.prefix(), "app: ");
        assert_eq!(buffer.contents(), "INFO app: one\napp: two\n");
    }

    #[test]
    fn test_output_at_decorates_from_sink_flags() {
        let buffer = SharedBuffer::default();
        let sink = Sink::new(buffer.clone(), "stored: ", Flags::PRECEDENCY);

        sink.output_at(Severity::Warn, "app: ", format_args!("one")).unwrap();
        sink.set_flags(Flags::empty());
        sink.output_at(Severity::Warn, "app: ", format_args!("two")).unwrap();

        assert_eq!(sink.prefix(), "stored: ");
        assert_eq!(buffer.contents(), "WARN app: one\napp: two\n");
    }

    #[test]
    fn test_decoration_precedes_header() {
        let buffer = SharedBuffer::default();
        let sink = Sink::new(buffer.clone(), "", Flags::PRECEDENCY | Flags::SHORT_FILE);

        let line = line!() + 1;
        sink.output_at(Severity::Error, "app: ", format_args!("e")).unwrap();

        assert_eq!(buffer.contents(), format!("ERROR app: sink.rs:{}: e\n", line));
    }

    #[test]
    fn test_message_may_write_to_same_sink() {
        struct Nested<'a>(&'a Sink);

        impl fmt::Display for Nested<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.output(format_args!("inner")).map_err(|_| fmt::Error)?;
                f.write_str("outer")
            }
        }

        let buffer = SharedBuffer::default();
        let sink = Sink::new(buffer.clone(), "s: ", Flags::empty());

        sink.output(format_args!("{}", Nested(&sink))).unwrap();

        assert_eq!(buffer.contents(), "s: inner\ns: outer\n");
    }

    #[test]
    fn test_failing_display_is_reported() {
        struct Broken;

        impl fmt::Display for Broken {
            fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
                Err(fmt::Error)
            }
        }

        let buffer = SharedBuffer::default();
        let sink = Sink::new(buffer.clone(), "", Flags::empty());

        let err = sink.output(format_args!("{}", Broken)).unwrap_err();
        assert!(matches!(err, LoggerError::FormatterError { .. }));
        assert_eq!(buffer.contents(), "");

        sink.output(format_args!("still usable")).unwrap();
        assert_eq!(buffer.contents(), "still usable\n");
    }

    #[test]
    fn test_setters() {
        let sink = Sink::new(io::sink(), "", Flags::STD);
        sink.set_prefix("svc ");
        sink.set_flags(Flags::SHORT_FILE);

        assert_eq!(sink.prefix(), "svc ");
        assert_eq!(sink.flags(), Flags::SHORT_FILE);
    }

    #[test]
    fn test_short_file_points_at_caller() {
        let buffer = SharedBuffer::default();
        let sink = Sink::new(buffer.clone(), "", Flags::SHORT_FILE);

        let line = line!() + 1;
        sink.output(format_args!("here")).unwrap();

        assert_eq!(buffer.contents(), format!("sink.rs:{}: here\n", line));
    }

    #[test]
    fn test_write_failure_is_reported() {
        let sink = Sink::new(FailingWriter, "", Flags::empty());
        let err = sink.output(format_args!("lost")).unwrap_err();
        assert!(matches!(err, LoggerError::IoError(_)));
    }

    #[test]
    fn test_file_sink_appends() {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("sink.log");

        {
            let sink = Sink::file(&path, "first ", Flags::empty()).unwrap();
            sink.output(format_args!("a")).unwrap();
        }
        {
            let sink = Sink::file(&path, "second ", Flags::empty()).unwrap();
            sink.output(format_args!("b")).unwrap();
        }

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first a\nsecond b\n");
    }

    #[test]
    fn test_file_sink_bad_path() {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("missing").join("sink.log");

        let err = Sink::file(&path, "", Flags::empty()).unwrap_err();
        assert!(matches!(err, LoggerError::IoOperation { .. }));
    }
}
