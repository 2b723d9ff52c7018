//! Configuration loader with multi-source merging

use super::file_config::{ConfigValidationError, LoggingConfig};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use stencil_domain::DomainError;
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading configuration at start-up
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error(transparent)]
    Level(#[from] DomainError),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ConfigValidationError),
}

/// Environment variable prefix, e.g. `STENCIL_LOG_LEVEL`
pub const ENV_PREFIX: &str = "STENCIL_LOG_";

/// Older name of `STENCIL_LOG_JSON`, still honored
pub const LEGACY_JSON_VAR: &str = "SLOG_LOG_JSON";

const PROJECT_FILES: [&str; 2] = ["stencil.toml", ".stencil.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `STENCIL_LOG_*` environment variables (`SLOG_LOG_JSON` below them)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./stencil.toml` or `./.stencil.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/stencil/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<LoggingConfig, ConfigError> {
        Self::extract(Self::file_figment(config_path))
    }

    /// Load defaults and environment only (for `--no-config`)
    pub fn load_without_files() -> Result<LoggingConfig, ConfigError> {
        Self::extract(Figment::new().merge(Serialized::defaults(LoggingConfig::default())))
    }

    fn file_figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(LoggingConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!(path = %global_path.display(), "loading global config");
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            debug!(path = %path.display(), "loading project config");
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            debug!(path = %path.display(), "loading explicit config");
            figment = figment.merge(Toml::file(path));
        }

        figment
    }

    fn extract(figment: Figment) -> Result<LoggingConfig, ConfigError> {
        let config: LoggingConfig = figment
            .merge(Env::raw().only(&[LEGACY_JSON_VAR]).map(|_| "json".into()))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(Box::new)?;

        config.validate()?;
        config.registry()?;
        Ok(config)
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/stencil/config.toml if set,
    /// otherwise falls back to ~/.config/stencil/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("stencil").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config file locations being used (for debugging)
    pub fn describe_sources(config_path: Option<&Path>) -> String {
        let mut lines = vec!["Configuration sources (in priority order):".to_string()];

        lines.push(format!("  [ENV  ] {ENV_PREFIX}* variables, then {LEGACY_JSON_VAR}"));

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISS " };
            lines.push(format!("  [{mark}] Explicit: {}", path.display()));
        }

        match Self::project_config_path() {
            Some(path) => lines.push(format!("  [FOUND] Project: {}", path.display())),
            None => lines.push("  [     ] Project: ./stencil.toml or ./.stencil.toml".to_string()),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("  [{mark}] Global:  {}", path.display()));
        }

        lines.push("  [     ] Default: built-in defaults".to_string());
        lines.join("\n")
    }
}
