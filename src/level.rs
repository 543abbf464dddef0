//! Host log levels and their mapping onto OpenTelemetry severities.
//!
//! Levels are ordered thresholds identified by an integer value. The label is
//! carried along as the record's severity text but never used for lookup.

use opentelemetry::logs::Severity;
use std::cmp::Ordering;
use std::fmt;

const ALL_INT: i32 = i32::MIN;
const TRACE_INT: i32 = 5_000;
const DEBUG_INT: i32 = 10_000;
const INFO_INT: i32 = 20_000;
const WARN_INT: i32 = 30_000;
const ERROR_INT: i32 = 40_000;
const OFF_INT: i32 = i32::MAX;

/// A leveled threshold as reported by the host logging framework.
#[derive(Debug, Clone, Copy)]
pub struct Level {
    value: i32,
    label: &'static str,
}

impl Level {
    /// Lowest threshold; matches everything.
    pub const ALL: Level = Level { value: ALL_INT, label: "ALL" };
    pub const TRACE: Level = Level { value: TRACE_INT, label: "TRACE" };
    pub const DEBUG: Level = Level { value: DEBUG_INT, label: "DEBUG" };
    pub const INFO: Level = Level { value: INFO_INT, label: "INFO" };
    pub const WARN: Level = Level { value: WARN_INT, label: "WARN" };
    pub const ERROR: Level = Level { value: ERROR_INT, label: "ERROR" };
    /// Highest threshold; matches nothing.
    pub const OFF: Level = Level { value: OFF_INT, label: "OFF" };

    /// Build a level outside the fixed set. It maps to an undefined severity
    /// unless `value` coincides with one of the known thresholds.
    pub const fn custom(value: i32, label: &'static str) -> Self {
        Self { value, label }
    }

    /// Numeric threshold used for ordering and severity lookup.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Original textual label, emitted verbatim as severity text.
    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl PartialEq for Level {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Level {}

impl PartialOrd for Level {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Level {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

/// Translate a host level into an OpenTelemetry severity.
///
/// `None` is the undefined severity: the record's severity number stays unset.
/// ALL and TRACE land on two adjacent severities, `Trace` and `Trace2`.
pub fn map_severity(level: Level) -> Option<Severity> {
    match level.value {
        ALL_INT => Some(Severity::Trace),
        TRACE_INT => Some(Severity::Trace2),
        DEBUG_INT => Some(Severity::Debug),
        INFO_INT => Some(Severity::Info),
        WARN_INT => Some(Severity::Warn),
        ERROR_INT => Some(Severity::Error),
        OFF_INT => None,
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_is_total_over_known_levels() {
        let table = [
            (Level::ALL, Some(Severity::Trace)),
            (Level::TRACE, Some(Severity::Trace2)),
            (Level::DEBUG, Some(Severity::Debug)),
            (Level::INFO, Some(Severity::Info)),
            (Level::WARN, Some(Severity::Warn)),
            (Level::ERROR, Some(Severity::Error)),
            (Level::OFF, None),
        ];
        for (level, expected) in table {
            assert_eq!(map_severity(level), expected, "level {level}");
        }
    }

    #[test]
    fn unrecognized_level_is_undefined() {
        assert_eq!(map_severity(Level::custom(15_000, "NOTICE")), None);
        assert_eq!(map_severity(Level::custom(-1, "WEIRD")), None);
    }

    #[test]
    fn all_and_trace_map_to_distinct_severities() {
        let all = map_severity(Level::ALL);
        let trace = map_severity(Level::TRACE);
        assert_ne!(all, trace);
        assert_eq!(Severity::Trace2 as i32, Severity::Trace as i32 + 1);
    }

    #[test]
    fn lookup_ignores_label() {
        // A custom level reusing a known label but not its threshold stays undefined.
        assert_eq!(map_severity(Level::custom(1, "INFO")), None);
        // A known threshold with a different label still maps.
        assert_eq!(map_severity(Level::custom(INFO_INT, "information")), Some(Severity::Info));
    }

    #[test]
    fn levels_are_ordered_thresholds() {
        let ascending = [
            Level::ALL,
            Level::TRACE,
            Level::DEBUG,
            Level::INFO,
            Level::WARN,
            Level::ERROR,
            Level::OFF,
        ];
        for pair in ascending.windows(2) {
            assert!(pair[0] < pair[1], "{} should sort below {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Level::WARN.to_string(), "WARN");
        assert_eq!(Level::custom(7, "FINE").label(), "FINE");
    }
}
