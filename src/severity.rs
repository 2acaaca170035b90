//! Backend severity levels.
//!
//! Severities are totally ordered from the noisiest ([`Severity::Trace`]) to
//! the most important ([`Severity::Panic`]). Rank arithmetic always clamps,
//! so any integer maps to a valid severity.

use std::fmt;
use std::str::FromStr;

use log::{Level, LevelFilter};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A discrete backend log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Severity {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
    Panic = 6,
}

impl Severity {
    /// All severities, least important first.
    pub const ALL: [Severity; 7] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
        Severity::Panic,
    ];

    /// Returns the position of this severity in the total order.
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Builds a severity from a rank, clamping out-of-range values.
    pub fn from_rank(rank: i64) -> Self {
        let max = Self::ALL.len() as i64 - 1;
        Self::ALL[rank.clamp(0, max) as usize]
    }

    /// Returns the lowercase name of this severity.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Trace => "trace",
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
            Severity::Panic => "panic",
        }
    }

    /// Maps this severity onto the `log` facade.
    ///
    /// The facade has no levels above `Error`, so `Fatal` and `Panic` share it.
    pub fn as_level(self) -> Level {
        match self {
            Severity::Trace => Level::Trace,
            Severity::Debug => Level::Debug,
            Severity::Info => Level::Info,
            Severity::Warn => Level::Warn,
            Severity::Error | Severity::Fatal | Severity::Panic => Level::Error,
        }
    }

    /// Returns the least important severity that passes `filter`.
    ///
    /// `Off` lets nothing through; it is reported as `Panic`, the highest
    /// severity this enum can express.
    pub fn from_filter(filter: LevelFilter) -> Self {
        match filter {
            LevelFilter::Off => Severity::Panic,
            LevelFilter::Error => Severity::Error,
            LevelFilter::Warn => Severity::Warn,
            LevelFilter::Info => Severity::Info,
            LevelFilter::Debug => Severity::Debug,
            LevelFilter::Trace => Severity::Trace,
        }
    }
}

impl From<Level> for Severity {
    fn from(level: Level) -> Self {
        match level {
            Level::Error => Severity::Error,
            Level::Warn => Severity::Warn,
            Level::Info => Severity::Info,
            Level::Debug => Severity::Debug,
            Level::Trace => Severity::Trace,
        }
    }
}

impl From<Severity> for LevelFilter {
    fn from(severity: Severity) -> Self {
        severity.as_level().to_level_filter()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|severity| severity.as_str() == name)
            .ok_or_else(|| Error::InvalidSeverity(s.to_string()))
    }
}
