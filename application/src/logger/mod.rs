//! Logger nodes.
//!
//! A [`Logger`] is an immutable pair of ambient metadata and field policy,
//! plus a handle to the runtime shared by the whole tree (threshold,
//! template cache, renderer, sink, clock). Deriving a node with
//! [`Logger::context`], [`Logger::module`] or [`Logger::with_formatting`]
//! returns a new node and leaves the receiver untouched, so nodes can be
//! cloned and handed to any number of call sites.
//!
//! # Log call flow
//!
//! ```text
//! level check → merge metadata → stamp time/level/template
//!   → compile (cached) → render message → renderer → sink
//! ```

mod builder;
mod error;
mod module_label;

pub use builder::LoggerBuilder;
pub use error::LogError;
pub use module_label::module_label;

use crate::ports::clock::Clock;
use crate::ports::record_renderer::RecordRenderer;
use crate::ports::record_sink::RecordSink;
use std::fmt;
use std::sync::Arc;
use stencil_domain::{FieldPolicy, Level, LevelRegistry, Metadata, Record, TemplateCache, keys};

/// State shared by every node derived from the same root
pub(crate) struct LoggerRuntime {
    registry: LevelRegistry,
    templates: Arc<TemplateCache>,
    renderer: Arc<dyn RecordRenderer>,
    sink: Arc<dyn RecordSink>,
    clock: Arc<dyn Clock>,
    module_root: Option<String>,
}

/// An immutable logging node.
#[derive(Clone)]
pub struct Logger {
    runtime: Arc<LoggerRuntime>,
    metadata: Arc<Metadata>,
    policy: Arc<FieldPolicy>,
}

impl Logger {
    fn new(runtime: Arc<LoggerRuntime>, metadata: Metadata, policy: FieldPolicy) -> Self {
        Self {
            runtime,
            metadata: Arc::new(metadata),
            policy: Arc::new(policy),
        }
    }

    /// Start building a root node
    pub fn builder(
        renderer: Arc<dyn RecordRenderer>,
        sink: Arc<dyn RecordSink>,
    ) -> LoggerBuilder {
        LoggerBuilder::new(renderer, sink)
    }

    /// A node sharing this node's runtime with the given metadata and policy
    pub fn with_parts(&self, metadata: impl Into<Metadata>, policy: FieldPolicy) -> Logger {
        Logger::new(Arc::clone(&self.runtime), metadata.into(), policy)
    }

    /// Derive a node whose metadata is this node's merged with `extra`.
    ///
    /// Keys in `extra` override same-named keys; the field policy is kept.
    pub fn context(&self, extra: impl Into<Metadata>) -> Logger {
        let extra = extra.into();
        Logger {
            runtime: Arc::clone(&self.runtime),
            metadata: Arc::new(self.metadata.merged(&extra)),
            policy: Arc::clone(&self.policy),
        }
    }

    /// Derive a node labelled with a module name taken from a source hint.
    ///
    /// Usually called through [`module_logger!`](crate::module_logger) with
    /// `file!()`; any stable string works.
    pub fn module(&self, hint: &str) -> Logger {
        let label = module_label(hint, self.runtime.module_root.as_deref());
        self.context(Metadata::new().with(keys::MODULE, label))
    }

    /// Derive a node with `policy` layered over this node's field policy.
    ///
    /// Metadata is inherited unchanged.
    pub fn with_formatting(&self, policy: &FieldPolicy) -> Logger {
        Logger {
            runtime: Arc::clone(&self.runtime),
            metadata: Arc::clone(&self.metadata),
            policy: Arc::new(self.policy.merged(policy)),
        }
    }

    /// Ambient metadata of this node
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Field policy of this node
    pub fn policy(&self) -> &FieldPolicy {
        &self.policy
    }

    /// Whether a call at `level` would produce output
    pub fn enabled(&self, level: Level) -> bool {
        self.runtime.registry.is_enabled(level)
    }

    /// The template cache shared by this node's tree
    pub fn templates(&self) -> &Arc<TemplateCache> {
        &self.runtime.templates
    }

    /// Log `template` at `level` with call-site `metadata`.
    ///
    /// Disabled levels return before any record is built or template
    /// compiled. Template and write failures are returned to the caller.
    pub fn log(
        &self,
        level: Level,
        template: &str,
        metadata: impl Into<Metadata>,
    ) -> Result<(), LogError> {
        if !self.enabled(level) {
            return Ok(());
        }

        let mut record = Record::new(
            &self.metadata,
            &metadata.into(),
            self.runtime.clock.now(),
            level,
            template,
        );

        let compiled = self.runtime.templates.get_or_compile(template)?;
        let message = if compiled.is_static() {
            compiled.source().to_string()
        } else {
            compiled.render(record.fields())?
        };
        record.set_message(message);

        let block = self.runtime.renderer.render(&record, &self.policy);
        self.runtime.sink.write(&block)?;
        Ok(())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.runtime.registry.threshold())
            .field("metadata", &self.metadata)
            .field("policy", &self.policy)
            .finish()
    }
}

macro_rules! level_methods {
    ($($(#[$doc:meta])* $name:ident => $level:expr;)*) => {
        impl Logger {
            $(
                $(#[$doc])*
                pub fn $name(
                    &self,
                    template: &str,
                    metadata: impl Into<Metadata>,
                ) -> Result<(), LogError> {
                    self.log($level, template, metadata)
                }
            )*
        }
    };
}

level_methods! {
    /// Log at `emerg`: the system is unusable
    emerg => Level::Emerg;
    /// Log at `alert`: action must be taken immediately
    alert => Level::Alert;
    /// Log at `crit`
    crit => Level::Crit;
    /// Log at `error`
    error => Level::Error;
    /// Log at `warn`
    warn => Level::Warn;
    /// Log at `notice`: normal but significant
    notice => Level::Notice;
    /// Log at `info`
    info => Level::Info;
    /// Log at `debug`
    debug => Level::Debug;
}

/// Derive a module-labelled node from the calling file.
///
/// ```ignore
/// let log = stencil_application::module_logger!(root);
/// ```
#[macro_export]
macro_rules! module_logger {
    ($logger:expr) => {
        $logger.module(file!())
    };
}
