//! Message templates.
//!
//! Two substitution forms are recognized:
//!
//! - `@identifier` (letters only) inserts the record field of that name;
//!   missing fields insert nothing.
//! - `@{ expr }` evaluates a restricted expression (see [`expr`]) with the
//!   record fields in scope and inserts the result.
//!
//! Templates are compiled once into a [`CompiledTemplate`] and kept in a
//! [`TemplateCache`] shared by every logger node.

mod cache;
mod compiler;
mod eval;
pub mod expr;

pub use cache::TemplateCache;
pub use compiler::CompiledTemplate;
