//! Construction of the root logger node

use super::{Logger, LoggerRuntime};
use crate::ports::clock::{Clock, SystemClock};
use crate::ports::record_renderer::RecordRenderer;
use crate::ports::record_sink::RecordSink;
use std::sync::Arc;
use stencil_domain::{FieldPolicy, LevelRegistry, Metadata, TemplateCache};
use tracing::debug;

/// Builder for the root [`Logger`].
///
/// Renderer and sink are required; everything else has a default:
/// threshold `debug`, a fresh template cache, the system clock, empty
/// metadata and the default field policy (`error` is an error field).
pub struct LoggerBuilder {
    renderer: Arc<dyn RecordRenderer>,
    sink: Arc<dyn RecordSink>,
    registry: LevelRegistry,
    templates: Option<Arc<TemplateCache>>,
    clock: Arc<dyn Clock>,
    module_root: Option<String>,
    metadata: Metadata,
    policy: FieldPolicy,
}

impl LoggerBuilder {
    pub fn new(renderer: Arc<dyn RecordRenderer>, sink: Arc<dyn RecordSink>) -> Self {
        Self {
            renderer,
            sink,
            registry: LevelRegistry::default(),
            templates: None,
            clock: Arc::new(SystemClock),
            module_root: None,
            metadata: Metadata::new(),
            policy: FieldPolicy::default(),
        }
    }

    pub fn registry(mut self, registry: LevelRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Share an existing template cache instead of creating one
    pub fn templates(mut self, templates: Arc<TemplateCache>) -> Self {
        self.templates = Some(templates);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Base directory stripped from hints passed to [`Logger::module`]
    pub fn module_root(mut self, root: impl Into<String>) -> Self {
        self.module_root = Some(root.into());
        self
    }

    /// Ambient metadata of the root node
    pub fn metadata(mut self, metadata: impl Into<Metadata>) -> Self {
        self.metadata = metadata.into();
        self
    }

    /// Field policy of the root node
    pub fn policy(mut self, policy: FieldPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn build(self) -> Logger {
        debug!(threshold = %self.registry.threshold(), "logger ready");
        let runtime = LoggerRuntime {
            registry: self.registry,
            templates: self.templates.unwrap_or_default(),
            renderer: self.renderer,
            sink: self.sink,
            clock: self.clock,
            module_root: self.module_root,
        };
        Logger::new(Arc::new(runtime), self.metadata, self.policy)
    }
}
