//! Severity levels and threshold filtering.
//!
//! Defines [`Level`], the fixed syslog-style ordering from `emerg` (most
//! severe) down to `debug` (least severe), and [`LevelRegistry`], which
//! answers whether a level passes the configured threshold.

mod registry;

pub use registry::LevelRegistry;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named severity rank.
///
/// Variants are declared from most to least severe, so the derived
/// ordering matches severity rank (`Emerg < Alert < ... < Debug`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Emerg,
    Alert,
    Crit,
    Error,
    Warn,
    Notice,
    Info,
    #[default]
    Debug,
}

impl Level {
    /// All levels, most severe first
    pub const ALL: [Level; 8] = [
        Level::Emerg,
        Level::Alert,
        Level::Crit,
        Level::Error,
        Level::Warn,
        Level::Notice,
        Level::Info,
        Level::Debug,
    ];

    /// Rank of this level; 0 is the most severe
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Lowercase name used in output and configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Emerg => "emerg",
            Level::Alert => "alert",
            Level::Crit => "crit",
            Level::Error => "error",
            Level::Warn => "warn",
            Level::Notice => "notice",
            Level::Info => "info",
            Level::Debug => "debug",
        }
    }

    /// Comma separated list of every level name, for error messages
    pub fn valid_names() -> String {
        Level::ALL
            .iter()
            .map(|l| l.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Level {
    type Err = crate::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Level::ALL
            .into_iter()
            .find(|level| level.as_str() == lowered)
            .ok_or_else(|| crate::DomainError::InvalidLevel {
                value: s.to_string(),
                valid: Level::valid_names(),
            })
    }
}
