//! Configuration loading for stencil
//!
//! Settings are read once at start-up. The priority order (highest to lowest):
//!
//! 1. `STENCIL_LOG_*` environment variables
//! 2. Legacy `SLOG_LOG_JSON` variable
//! 3. `--config <path>` specified file
//! 4. Project root: `./stencil.toml` or `./.stencil.toml`
//! 5. XDG config: `$XDG_CONFIG_HOME/stencil/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{ConfigValidationError, LoggingConfig};
pub use loader::{ConfigError, ConfigLoader, ENV_PREFIX, LEGACY_JSON_VAR};
