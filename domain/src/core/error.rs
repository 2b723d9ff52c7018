//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The configured threshold is not one of the known level names
    #[error("Invalid log level '{value}' (expected one of: {valid})")]
    InvalidLevel { value: String, valid: String },
}

impl DomainError {
    /// Check if this error comes from an unrecognized level name
    pub fn is_invalid_level(&self) -> bool {
        matches!(self, DomainError::InvalidLevel { .. })
    }
}

/// Errors raised while compiling or rendering a message template
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// An `@{...}` block could not be parsed
    #[error("Template syntax error in {template:?} at offset {position}: {reason}")]
    Syntax {
        template: String,
        position: usize,
        reason: String,
    },

    /// An `@{...}` block failed while being evaluated against a record
    #[error("Template evaluation failed in {template:?}: {reason}")]
    Eval { template: String, reason: String },
}

impl TemplateError {
    /// The raw template string that produced this error
    pub fn template(&self) -> &str {
        match self {
            TemplateError::Syntax { template, .. } | TemplateError::Eval { template, .. } => {
                template
            }
        }
    }
}
