//! Infrastructure layer for stencil
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration loading.

pub mod config;
pub mod logging;

// Re-export commonly used types
pub use config::{ConfigError, ConfigLoader, ConfigValidationError, LoggingConfig};
pub use logging::StdoutSink;
