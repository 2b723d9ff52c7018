//! Field formatting: per-key policy and value rendering.
//!
//! A [`FieldPolicy`] maps metadata keys to a [`FieldKind`]; the
//! [`FieldFormatter`] turns values into their rendered form for that kind.
//! [`ErrorValue`] captures Rust errors in the shape the formatter expects.

mod error_value;
mod formatter;
mod policy;

pub use error_value::ErrorValue;
pub use formatter::{FieldFormatter, STACK_KEY, display_value, is_falsy};
pub use policy::{FieldKind, FieldPolicy};
