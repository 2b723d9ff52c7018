//! Standard output writer for rendered records.
//!
//! Each block is written with a single locked `write_all` followed by a
//! flush, so concurrent callers never interleave within a block.

use stencil_application::RecordSink;
use std::io::{self, Write};

/// Record sink that writes to the process's standard output
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl RecordSink for StdoutSink {
    fn write(&self, block: &str) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        write_block(&mut handle, block)
    }
}

/// Write one block in full and flush it
fn write_block<W: Write>(writer: &mut W, block: &str) -> io::Result<()> {
    writer.write_all(block.as_bytes())?;
    writer.flush()
}
