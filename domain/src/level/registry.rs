//! Threshold check shared by every logger node

use super::Level;
use crate::DomainError;

/// Configured severity threshold.
///
/// Built once at start-up and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LevelRegistry {
    threshold: Level,
}

impl LevelRegistry {
    /// Registry that lets `threshold` and everything more severe through
    pub fn new(threshold: Level) -> Self {
        Self { threshold }
    }

    /// Validate a threshold name (case-insensitive) and build the registry
    pub fn configure(threshold_name: &str) -> Result<Self, DomainError> {
        Ok(Self::new(threshold_name.parse()?))
    }

    /// The configured threshold
    pub fn threshold(&self) -> Level {
        self.threshold
    }

    /// True iff `level` is at least as severe as the threshold
    pub fn is_enabled(&self, level: Level) -> bool {
        level.rank() <= self.threshold.rank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warn_threshold() {
        let registry = LevelRegistry::configure("warn").unwrap();
        for level in [
            Level::Emerg,
            Level::Alert,
            Level::Crit,
            Level::Error,
            Level::Warn,
        ] {
            assert!(registry.is_enabled(level), "{level} should be enabled");
        }
        for level in [Level::Notice, Level::Info, Level::Debug] {
            assert!(!registry.is_enabled(level), "{level} should be disabled");
        }
    }

    #[test]
    fn test_default_enables_everything() {
        let registry = LevelRegistry::default();
        assert_eq!(registry.threshold(), Level::Debug);
        assert!(Level::ALL.iter().all(|l| registry.is_enabled(*l)));
    }

    #[test]
    fn test_emerg_threshold_only_emerg() {
        let registry = LevelRegistry::configure("EMERG").unwrap();
        assert!(registry.is_enabled(Level::Emerg));
        assert!(!registry.is_enabled(Level::Alert));
    }

    #[test]
    fn test_configure_invalid_name() {
        let err = LevelRegistry::configure("loud").unwrap_err();
        assert!(err.is_invalid_level());
    }
}
