//! Property-based tests for journal using proptest

mod common;

use common::SharedBuffer;
use journal::prelude::*;
use journal::{name_of, SEVERITY_NAMES};
use proptest::prelude::*;

fn any_severity() -> impl Strategy<Value = Severity> {
    prop::sample::select(Severity::LEVELS.to_vec())
}

fn filtered_severity() -> impl Strategy<Value = Severity> {
    prop::sample::select(vec![
        Severity::Error,
        Severity::Warn,
        Severity::Info,
        Severity::Debug,
        Severity::Trace,
    ])
}

// ============================================================================
// Severity Tests
// ============================================================================

proptest! {
    /// Parsing a display name in any casing yields the same severity
    #[test]
    fn test_severity_name_any_case(severity in any_severity(), mask in any::<u8>()) {
        let mixed: String = severity
            .name()
            .chars()
            .enumerate()
            .map(|(i, c)| if mask & (1 << (i % 8)) != 0 { c.to_ascii_lowercase() } else { c })
            .collect();

        prop_assert_eq!(mixed.parse::<Severity>().unwrap(), severity);
    }

    /// Anything that is not one of the eight names is rejected
    #[test]
    fn test_unknown_names_rejected(name in "[a-zA-Z]{1,12}") {
        let known = SEVERITY_NAMES.contains(&name.to_uppercase().as_str());
        prop_assert_eq!(name.parse::<Severity>().is_ok(), known);
    }

    /// The name table and the value lookup agree
    #[test]
    fn test_name_lookup(value in -20i32..20) {
        match Severity::from_value(value) {
            Some(severity) => {
                prop_assert_eq!(severity.value(), value);
                prop_assert_eq!(name_of(value), Some(SEVERITY_NAMES[value as usize]));
            }
            None => {
                prop_assert!(!(0..8).contains(&value));
                prop_assert_eq!(name_of(value), None);
            }
        }
    }
}

// ============================================================================
// Filtering Tests
// ============================================================================

proptest! {
    /// A message is written iff its severity value is at or below the threshold,
    /// including thresholds outside the named range
    #[test]
    fn test_filter_any_threshold(severity in filtered_severity(), threshold in any::<i32>()) {
        let buffer = SharedBuffer::default();
        let logger = Logger::new(buffer.clone(), "", Flags::empty(), threshold);

        logger.log(severity, "message");

        prop_assert_eq!(!buffer.contents().is_empty(), severity.value() <= threshold);
    }

    /// Decoration is exactly "<NAME> " + prefix when enabled, and the bare prefix otherwise
    #[test]
    fn test_decoration(
        severity in filtered_severity(),
        prefix in "[ -~]{0,16}",
        decorate in any::<bool>(),
    ) {
        let buffer = SharedBuffer::default();
        let flags = if decorate { Flags::PRECEDENCY } else { Flags::empty() };
        let logger = Logger::new(buffer.clone(), prefix.clone(), flags, Severity::All);

        logger.log(severity, "body");

        let expected = if decorate {
            format!("{} {}body\n", severity.name(), prefix)
        } else {
            format!("{}body\n", prefix)
        };
        prop_assert_eq!(buffer.contents(), expected);
        prop_assert_eq!(logger.prefix(), prefix);
    }

    /// Any flag bits survive a set/get round trip unchanged
    #[test]
    fn test_flags_pass_through(bits in any::<u32>()) {
        let logger = Logger::new(std::io::sink(), "", Flags::empty(), Severity::Info);
        logger.set_flags(Flags::from_bits_retain(bits));
        prop_assert_eq!(logger.flags().bits(), bits);
    }
}
