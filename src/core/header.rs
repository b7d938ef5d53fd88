//! Line header formatting
//!
//! Builds everything that precedes the message on an output line:
//! the prefix, then the date and time, then the caller's file and line,
//! each part present only when its flag is set.
//!
//! ```
//! use chrono::{Local, TimeZone};
//! use journal::core::header::{format_header, CallSite};
//! use journal::Flags;
//!
//! let now = Local.with_ymd_and_hms(2009, 1, 23, 1, 23, 23).unwrap();
//! let site = CallSite { file: "/a/b/c/d.rs", line: 23 };
//!
//! let mut line = String::new();
//! format_header(&mut line, "app: ", Flags::STD | Flags::SHORT_FILE, &now, site);
//! assert_eq!(line, "app: 2009/01/23 01:23:23 d.rs:23: ");
//! ```

use super::flags::Flags;
use chrono::{DateTime, Local};
use std::fmt::Write;
use std::panic::Location;

/// Source position of the call that produced a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite<'a> {
    pub file: &'a str,
    pub line: u32,
}

impl<'a> From<&'a Location<'a>> for CallSite<'a> {
    fn from(location: &'a Location<'a>) -> Self {
        CallSite {
            file: location.file(),
            line: location.line(),
        }
    }
}

/// Final path element, accepting both separators.
pub fn short_file(file: &str) -> &str {
    file.rsplit(['/', '\\']).next().unwrap_or(file)
}

/// Append the header for a single line to `buf`.
pub fn format_header(
    buf: &mut String,
    prefix: &str,
    flags: Flags,
    now: &DateTime<Local>,
    site: CallSite<'_>,
) {
    buf.push_str(prefix);

    if flags.has_timestamp() {
        // Writing into a String cannot fail.
        if flags.contains(Flags::DATE) {
            let _ = write!(buf, "{} ", now.format("%Y/%m/%d"));
        }
        if flags.intersects(Flags::TIME | Flags::MICROSECONDS) {
            if flags.contains(Flags::MICROSECONDS) {
                let _ = write!(buf, "{} ", now.format("%H:%M:%S%.6f"));
            } else {
                let _ = write!(buf, "{} ", now.format("%H:%M:%S"));
            }
        }
    }

    if flags.has_location() {
        let file = if flags.contains(Flags::SHORT_FILE) {
            short_file(site.file)
        } else {
            site.file
        };
        let _ = write!(buf, "{}:{}: ", file, site.line);
    }
}
