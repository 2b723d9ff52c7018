//! Port for turning a composed record into output text

use stencil_domain::{FieldPolicy, Record};

/// Renders a fully composed [`Record`].
///
/// The field policy of the logger node that produced the record decides,
/// per metadata key, whether a value is printed as-is or as error text.
/// The returned block must end with a newline.
pub trait RecordRenderer: Send + Sync {
    fn render(&self, record: &Record, policy: &FieldPolicy) -> String;
}
