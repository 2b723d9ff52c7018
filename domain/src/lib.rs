//! Domain layer for stencil
//!
//! This crate contains the logging core's value types and pure logic.
//! It has no knowledge of where records are written or how they are styled.
//!
//! # Core Concepts
//!
//! - **Level**: fixed severity order from `emerg` down to `debug`, filtered
//!   by a [`LevelRegistry`] threshold
//! - **Metadata**: ordered key/value context merged into every [`Record`]
//! - **Field policy**: per-key choice between plain and error rendering
//! - **Template**: `@field` / `@{expr}` message strings compiled once and
//!   cached in a [`TemplateCache`]

pub mod core;
pub mod field;
pub mod level;
pub mod record;
pub mod template;

// Re-export commonly used types
pub use crate::core::error::{DomainError, TemplateError};
pub use field::{ErrorValue, FieldFormatter, FieldKind, FieldPolicy};
pub use level::{Level, LevelRegistry};
pub use record::{GLOBAL_MODULE, Metadata, Record, format_time_utc, keys};
pub use template::{CompiledTemplate, TemplateCache};
