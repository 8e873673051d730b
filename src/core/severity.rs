//! Severity levels and the verbosity-count mapping

use serde::{Deserialize, Serialize};
use std::fmt;

/// Importance of a log message, used for filtering and display.
///
/// The discriminants are the raw integer values carried across the logger
/// contract; sinks filter by comparing them numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum Severity {
    Trace = 0,
    Debug = 1,
    #[default]
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    /// Recover a severity from its raw contract value.
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Severity::Trace),
            1 => Some(Severity::Debug),
            2 => Some(Severity::Info),
            3 => Some(Severity::Warn),
            4 => Some(Severity::Error),
            5 => Some(Severity::Fatal),
            _ => None,
        }
    }

    /// Display token for a raw severity value.
    ///
    /// Total over all integers: values outside the enumeration map to the
    /// empty token rather than failing, since handlers may receive severities
    /// minted by a newer library revision.
    pub fn label(raw: i32) -> &'static str {
        Self::from_raw(raw).map_or("", Self::as_str)
    }
}

impl From<Severity> for i32 {
    fn from(severity: Severity) -> i32 {
        severity as i32
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Map a `LDCP_LOGLEVEL` verbosity count to a minimum severity value.
///
/// Small positive counts mean "more verbose": `1` exposes `Warn` and above,
/// `2` exposes `Info`, and so on, pivoting on `Error`. The result is plain
/// integer arithmetic with no clamping, so large counts fall below `Trace`
/// (everything passes) and negative counts rise above `Fatal` (nothing
/// passes).
pub fn min_level_for_verbosity(count: i32) -> i32 {
    Severity::Error as i32 - count
}
