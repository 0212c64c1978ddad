//! Severity scale and level normalization

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DebugError;

/// Syslog-style severity, most severe first
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Emerg,
    Alert,
    Crit,
    Err,
    Warn,
    Notice,
    Info,
    Debug,
}

impl Severity {
    /// Numeric rank, `0` for the most severe
    pub fn code(&self) -> u8 {
        *self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Emerg => "emerg",
            Self::Alert => "alert",
            Self::Crit => "crit",
            Self::Err => "err",
            Self::Warn => "warn",
            Self::Notice => "notice",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    /// Uppercase label used when formatting log lines
    pub fn label(&self) -> &'static str {
        match self {
            Self::Emerg => "EMERG",
            Self::Alert => "ALERT",
            Self::Crit => "CRIT",
            Self::Err => "ERR",
            Self::Warn => "WARN",
            Self::Notice => "NOTICE",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        }
    }

    /// Resolve a severity name, accepting both long and short spellings
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "emergency" | "emerg" => Some(Self::Emerg),
            "alert" => Some(Self::Alert),
            "critical" | "crit" => Some(Self::Crit),
            "error" | "err" => Some(Self::Err),
            "warning" | "warn" => Some(Self::Warn),
            "notice" => Some(Self::Notice),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = DebugError;

    fn from_str(s: &str) -> Result<Self, DebugError> {
        Self::from_name(s).ok_or_else(|| DebugError::InvalidLevel {
            given: s.to_string(),
        })
    }
}

/// Level as accepted at the logging surface
///
/// Callers either pass a [`Severity`] directly or a severity name that is
/// resolved during dispatch. Unknown names fail the whole call, they are
/// never silently downgraded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Level {
    Severity(Severity),
    Named(String),
}

impl Level {
    /// Collapse to a concrete [`Severity`]
    pub fn normalize(&self) -> Result<Severity, DebugError> {
        match self {
            Self::Severity(severity) => Ok(*severity),
            Self::Named(name) => name.parse(),
        }
    }
}

impl From<Severity> for Level {
    fn from(severity: Severity) -> Self {
        Self::Severity(severity)
    }
}

impl From<&str> for Level {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl From<String> for Level {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}
