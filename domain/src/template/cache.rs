//! Shared cache of compiled templates keyed by their exact source string

use super::CompiledTemplate;
use crate::TemplateError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::trace;

/// Append-only cache of compiled templates.
///
/// Entries are never evicted: templates are expected to be a small set of
/// literals known at build time. Shared between logger nodes through an
/// `Arc`. When two callers compile the same template concurrently, the
/// first insert wins and both receive the stored entry.
#[derive(Debug, Default)]
pub struct TemplateCache {
    entries: RwLock<HashMap<String, Arc<CompiledTemplate>>>,
    compiles: AtomicUsize,
}

impl TemplateCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached compilation of `template`, compiling it on first use.
    ///
    /// Templates that fail to compile are not cached.
    pub fn get_or_compile(&self, template: &str) -> Result<Arc<CompiledTemplate>, TemplateError> {
        if let Some(compiled) = self.lookup(template) {
            return Ok(compiled);
        }

        let compiled = Arc::new(CompiledTemplate::compile(template)?);
        self.compiles.fetch_add(1, Ordering::Relaxed);
        trace!(template, "compiled log template");

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(
            entries.entry(template.to_string()).or_insert(compiled),
        ))
    }

    fn lookup(&self, template: &str) -> Option<Arc<CompiledTemplate>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(template)
            .cloned()
    }

    /// Number of compilations performed so far
    pub fn compile_count(&self) -> usize {
        self.compiles.load(Ordering::Relaxed)
    }

    /// Number of distinct templates stored
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
