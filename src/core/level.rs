//! Severity level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered severity levels, most restrictive to most verbose.
///
/// A message started at level `L` is emitted only when `L <= threshold`,
/// so `Suppress` as a threshold silences everything (including `Fatal`)
/// and `All` admits every named level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Default)]
pub enum Level {
    /// Suppress all output.
    Suppress = 0,
    /// Unrecoverable error, program exit.
    Fatal = 1,
    /// Error preventing correct continuation in this part.
    #[default]
    Error = 2,
    /// Abnormal or unexpected, perhaps wrong.
    Warning = 3,
    /// User info.
    Info = 4,
    /// Detailed info for debugging.
    Debug = 5,
    /// Admit every named level.
    All = 6,
}

impl Level {
    /// Header tag for the named levels. `Suppress` and `All` never tag a
    /// message and return `None`.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Level::Fatal => Some("FATAL ERROR"),
            Level::Error => Some("ERROR"),
            Level::Warning => Some("WARNING"),
            Level::Info => Some("INFO"),
            Level::Debug => Some("DEBUG"),
            Level::Suppress | Level::All => None,
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Level::Suppress => "SUPPRESS",
            Level::Fatal => "FATAL",
            Level::Error => "ERROR",
            Level::Warning => "WARNING",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::All => "ALL",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SUPPRESS" | "NONE" => Ok(Level::Suppress),
            "FATAL" => Ok(Level::Fatal),
            "ERROR" => Ok(Level::Error),
            "WARN" | "WARNING" => Ok(Level::Warning),
            "INFO" => Ok(Level::Info),
            "DEBUG" => Ok(Level::Debug),
            "ALL" => Ok(Level::All),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
