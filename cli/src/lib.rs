//! Stencil: leveled, templated structured logging.
//!
//! This crate wires the domain, application, infrastructure and
//! presentation layers into a ready-to-use root [`Logger`].
//!
//! ```no_run
//! use serde_json::json;
//!
//! let log = stencil::init()?;
//! let jobs = stencil::module_logger!(log).context(json!({ "queue": "mail" }));
//! jobs.info("sent @count messages", json!({ "count": 3 }))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::sync::Arc;
use tracing::debug;

pub use stencil_application::{
    Clock, FixedClock, LogError, Logger, LoggerBuilder, MemorySink, RecordRenderer, RecordSink,
    SystemClock, module_label, module_logger,
};
pub use stencil_domain::{
    DomainError, ErrorValue, FieldKind, FieldPolicy, Level, Metadata, Record, TemplateError,
};
pub use stencil_infrastructure::{ConfigError, ConfigLoader, LoggingConfig, StdoutSink};
pub use stencil_presentation::{ConsoleRenderer, JsonRenderer, WidthSource};

/// Load configuration from files and environment and build the root logger
pub fn init() -> Result<Logger, ConfigError> {
    let config = ConfigLoader::load(None)?;
    from_config(&config)
}

/// Build the root logger writing to standard output
pub fn from_config(config: &LoggingConfig) -> Result<Logger, ConfigError> {
    from_config_with_sink(config, Arc::new(StdoutSink::new()))
}

/// Build the root logger writing to `sink`.
///
/// Validates the configuration first, so an unknown level name fails here
/// before any node exists.
pub fn from_config_with_sink(
    config: &LoggingConfig,
    sink: Arc<dyn RecordSink>,
) -> Result<Logger, ConfigError> {
    config.validate()?;
    let registry = config.registry()?;

    let renderer: Arc<dyn RecordRenderer> = if config.json {
        Arc::new(JsonRenderer::new())
    } else {
        Arc::new(
            ConsoleRenderer::new()
                .with_color(config.color)
                .with_width(WidthSource::Detect {
                    fallback: config.fallback_width,
                }),
        )
    };
    debug!(json = config.json, color = config.color, "renderer selected");

    let mut builder = Logger::builder(renderer, sink).registry(registry);
    if let Some(root) = &config.module_root {
        builder = builder.module_root(root.clone());
    }
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use serde_json::{Value, json};

    fn config(json: bool) -> LoggingConfig {
        LoggingConfig {
            json,
            color: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_invalid_level_fails_before_logging() {
        let config = LoggingConfig {
            level: "loud".to_string(),
            ..Default::default()
        };
        let err = from_config_with_sink(&config, Arc::new(MemorySink::new())).unwrap_err();
        assert!(matches!(err, ConfigError::Level(_)));
    }

    #[test]
    fn test_json_mode_writes_json_lines() {
        let sink = Arc::new(MemorySink::new());
        let log = from_config_with_sink(&config(true), sink.clone()).unwrap();

        log.info("hello @name", json!({ "name": "ada" })).unwrap();

        let out = sink.contents();
        assert!(out.ends_with('\n'));
        let value: Value = serde_json::from_str(out.trim_end()).unwrap();
        assert_eq!(value["message"], "hello ada");
        assert_eq!(value["level"], "info");
        assert_eq!(value["name"], "ada");
    }

    #[test]
    fn test_console_mode_writes_plain_lines() {
        let sink = Arc::new(MemorySink::new());
        let log = from_config_with_sink(&config(false), sink.clone()).unwrap();

        log.warn("disk at @pct%", json!({ "pct": 93 })).unwrap();

        let out = sink.contents();
        assert!(out.contains(" warn global> disk at 93%"));
        assert!(out.contains("pct: 93"));
    }

    #[test]
    fn test_threshold_applies() {
        let sink = Arc::new(MemorySink::new());
        let config = LoggingConfig {
            level: "error".to_string(),
            ..config(true)
        };
        let log = from_config_with_sink(&config, sink.clone()).unwrap();

        log.debug("hidden", ()).unwrap();
        log.info("hidden", ()).unwrap();
        assert!(sink.is_empty());

        log.crit("shown", ()).unwrap();
        assert_eq!(sink.blocks().len(), 1);
    }

    #[test]
    fn test_module_root_is_stripped() {
        let sink = Arc::new(MemorySink::new());
        let config = LoggingConfig {
            module_root: Some("/srv/app".to_string()),
            ..config(true)
        };
        let log = from_config_with_sink(&config, sink.clone()).unwrap();

        log.module("/srv/app/worker/src/jobs/mail.rs")
            .info("ok", ())
            .unwrap();
        let value: Value = serde_json::from_str(sink.contents().trim_end()).unwrap();
        assert_eq!(value["module"], "jobs/mail");
    }

    #[test]
    fn test_module_logger_macro_uses_file() {
        let sink = Arc::new(MemorySink::new());
        let log = from_config_with_sink(&config(true), sink.clone()).unwrap();

        module_logger!(log).info("from lib", ()).unwrap();
        let value: Value = serde_json::from_str(sink.contents().trim_end()).unwrap();
        assert_eq!(value["module"], "lib");
    }

    #[test]
    fn test_fixed_clock_builder() {
        let sink = Arc::new(MemorySink::new());
        let at = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        let log = Logger::builder(
            Arc::new(ConsoleRenderer::new().with_color(false).with_width(WidthSource::Fixed(20))),
            sink.clone(),
        )
        .clock(Arc::new(FixedClock(at)))
        .build();

        log.notice("boot", ()).unwrap();
        assert!(sink.contents().starts_with("2024/03/09-07:05:01 notice global> boot"));
    }
}
