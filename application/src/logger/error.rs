//! Errors returned by a log call

use stencil_domain::TemplateError;
use thiserror::Error;

/// Failure of a single log call.
///
/// A broken template is a programming defect and is surfaced to the caller
/// instead of being dropped. Write failures are not retried.
#[derive(Error, Debug)]
pub enum LogError {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("Failed to write log output: {0}")]
    Write(#[from] std::io::Error),
}

impl LogError {
    /// Check if this error comes from the message template
    pub fn is_template(&self) -> bool {
        matches!(self, LogError::Template(_))
    }
}
