//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that presentation and infrastructure adapters
//! implement: how a record becomes text, where text goes, and what time it is.

pub mod clock;
pub mod record_renderer;
pub mod record_sink;
