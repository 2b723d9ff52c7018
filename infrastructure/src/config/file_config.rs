//! Raw configuration data types
//!
//! These structs mirror the keys accepted in `stencil.toml` and in
//! `STENCIL_LOG_*` environment variables.

use serde::{Deserialize, Deserializer, Serialize};
use stencil_domain::{DomainError, LevelRegistry};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("fallback_width cannot be 0")]
    InvalidFallbackWidth,
}

/// Logging configuration, read once at start-up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Threshold level name, case-insensitive
    pub level: String,
    /// Emit JSON lines instead of console lines
    #[serde(deserialize_with = "bool_like")]
    pub json: bool,
    /// Colorize console output
    pub color: bool,
    /// Console width used when stdout is not a terminal
    pub fallback_width: u16,
    /// Base directory stripped from module hints
    pub module_root: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
            json: false,
            color: true,
            fallback_width: 50,
            module_root: None,
        }
    }
}

impl LoggingConfig {
    /// Validate the threshold name and build the level registry
    pub fn registry(&self) -> Result<LevelRegistry, DomainError> {
        LevelRegistry::configure(&self.level)
    }

    /// Validate the remaining settings
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.fallback_width == 0 {
            return Err(ConfigValidationError::InvalidFallbackWidth);
        }
        Ok(())
    }
}

/// Accept a real bool, or a string that is true iff it equals `"true"`
/// ignoring case. Anything else is false.
fn bool_like<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolLike {
        Bool(bool),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match BoolLike::deserialize(deserializer)? {
        BoolLike::Bool(b) => b,
        BoolLike::Text(s) => s.trim().eq_ignore_ascii_case("true"),
        BoolLike::Other(_) => false,
    })
}
