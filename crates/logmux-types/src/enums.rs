//! Common enumerations used throughout logmux.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::errors::{LogError, Result};

/// Severity of a log message, ranked following the Syslog-style ordering.
///
/// The discriminant is the numeric rank; [`Severity::from_rank`] recovers a
/// severity from a raw rank coming from outside the type system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Severity {
    /// Detailed trace messages
    Trace = 0,
    /// Debug messages
    Debug = 1,
    /// Informational messages
    Info = 2,
    /// Warnings
    Warn = 3,
    /// Errors
    #[serde(alias = "ERR")]
    Error = 4,
    /// Action must be taken immediately
    Alert = 5,
    /// Critical conditions
    Crit = 6,
    /// System is unusable
    Emerg = 7,
    /// Normal but significant condition
    Notice = 8,
}

impl Severity {
    /// Every severity, in rank order.
    pub const ALL: [Severity; 9] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Alert,
        Severity::Crit,
        Severity::Emerg,
        Severity::Notice,
    ];

    /// Numeric rank of this severity.
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Look up a severity by numeric rank.
    ///
    /// Returns `None` for ranks outside the enumeration.
    pub fn from_rank(rank: u8) -> Option<Self> {
        Self::ALL.get(usize::from(rank)).copied()
    }

    /// Tag printed between brackets in a formatted line.
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Alert => "ALERT",
            Severity::Crit => "CRIT",
            Severity::Emerg => "EMERG",
            Severity::Notice => "NOTICE",
        }
    }
}

impl FromStr for Severity {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "TRACE" => Ok(Severity::Trace),
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARN" | "WARNING" => Ok(Severity::Warn),
            "ERR" | "ERROR" => Ok(Severity::Error),
            "ALERT" => Ok(Severity::Alert),
            "CRIT" | "CRITICAL" => Ok(Severity::Crit),
            "EMERG" | "EMERGENCY" => Ok(Severity::Emerg),
            "NOTICE" => Ok(Severity::Notice),
            _ => Err(LogError::Other(format!("Invalid severity: {}", s))),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rank_order_matches_declaration() {
        for (i, severity) in Severity::ALL.iter().enumerate() {
            assert_eq!(usize::from(severity.rank()), i);
        }
        assert!(Severity::Trace < Severity::Error);
        assert!(Severity::Emerg < Severity::Notice);
    }

    #[test]
    fn test_err_displays_as_error() {
        assert_eq!(Severity::Error.to_string(), "ERROR");
        assert_eq!(Severity::Warn.to_string(), "WARN");
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("warn".parse::<Severity>().unwrap(), Severity::Warn);
        assert_eq!("Warning".parse::<Severity>().unwrap(), Severity::Warn);
        assert_eq!("ERR".parse::<Severity>().unwrap(), Severity::Error);
        assert_eq!("error".parse::<Severity>().unwrap(), Severity::Error);
        assert_eq!("notice".parse::<Severity>().unwrap(), Severity::Notice);
        assert!("loud".parse::<Severity>().is_err());
    }

    #[test]
    fn test_from_rank_rejects_foreign_values() {
        assert_eq!(Severity::from_rank(2), Some(Severity::Info));
        assert_eq!(Severity::from_rank(8), Some(Severity::Notice));
        assert_eq!(Severity::from_rank(9), None);
        assert_eq!(Severity::from_rank(u8::MAX), None);
    }

    proptest! {
        #[test]
        fn prop_rank_roundtrips(rank in 0u8..9) {
            let severity = Severity::from_rank(rank).unwrap();
            prop_assert_eq!(severity.rank(), rank);
            prop_assert_eq!(severity.tag().parse::<Severity>().unwrap(), severity);
        }
    }
}
