//! Output streams for rendered records.
//!
//! Provides [`StdoutSink`], which implements the
//! [`RecordSink`](stencil_application::RecordSink) port.

mod stdout_sink;

pub use stdout_sink::StdoutSink;
