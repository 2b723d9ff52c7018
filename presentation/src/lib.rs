//! Presentation layer for stencil
//!
//! This crate contains the record renderers (console and JSON), the error
//! box layout, terminal width detection and the CLI definitions.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::console::ConsoleRenderer;
pub use output::json::JsonRenderer;
pub use output::terminal::{DEFAULT_FALLBACK_WIDTH, WidthSource};
