//! Application layer for stencil
//!
//! This crate contains logger nodes and the port definitions their output
//! flows through. It depends only on the domain layer.

pub mod logger;
pub mod ports;

// Re-export commonly used types
pub use logger::{LogError, Logger, LoggerBuilder, module_label};
pub use ports::{
    clock::{Clock, FixedClock, SystemClock},
    record_renderer::RecordRenderer,
    record_sink::{MemorySink, NoSink, RecordSink},
};
