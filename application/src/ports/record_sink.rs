//! Port for the output stream rendered records are written to.
//!
//! Defines the [`RecordSink`] trait. A sink receives one fully rendered
//! block per log call (a JSON line, or a console line plus any error boxes)
//! and must write it in a single operation so concurrent callers never
//! interleave partial lines.

use std::io;
use std::sync::{Mutex, PoisonError};

/// Destination for rendered log output.
///
/// `write` is synchronous: it returns once the block has been handed to
/// the underlying stream. Failures are returned to the logging call, never
/// retried.
pub trait RecordSink: Send + Sync {
    /// Write one rendered block (already newline terminated).
    fn write(&self, block: &str) -> io::Result<()>;
}

/// In-memory sink collecting every block, for tests and embedders that
/// want to inspect output.
#[derive(Debug, Default)]
pub struct MemorySink {
    blocks: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All blocks written so far, in call order
    pub fn blocks(&self) -> Vec<String> {
        self.blocks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Everything written so far as one string
    pub fn contents(&self) -> String {
        self.blocks().concat()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl RecordSink for MemorySink {
    fn write(&self, block: &str) -> io::Result<()> {
        self.blocks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(block.to_string());
        Ok(())
    }
}

/// Sink that discards everything.
pub struct NoSink;

impl RecordSink for NoSink {
    fn write(&self, _block: &str) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_keeps_order() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());
        sink.write("one\n").unwrap();
        sink.write("two\n").unwrap();
        assert_eq!(sink.blocks(), vec!["one\n", "two\n"]);
        assert_eq!(sink.contents(), "one\ntwo\n");
    }

    #[test]
    fn test_no_sink_accepts_everything() {
        assert!(NoSink.write("ignored").is_ok());
    }
}
