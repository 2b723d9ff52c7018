//! Capture Rust errors as metadata values

use super::formatter::STACK_KEY;
use serde_json::{Map, Value};
use std::error::Error;

/// Converts errors into the `{name, message, stack}` shape understood by
/// the field formatter.
pub struct ErrorValue;

impl ErrorValue {
    /// Capture `err` and its `source()` chain.
    ///
    /// `name` is the error's type name without its module path. `stack`
    /// holds the message followed by one `    caused by: ...` line per source.
    pub fn capture<E: Error + 'static>(err: &E) -> Value {
        let message = err.to_string();
        let mut stack = message.clone();
        let mut source = err.source();
        while let Some(cause) = source {
            stack.push_str("\n    caused by: ");
            stack.push_str(&cause.to_string());
            source = cause.source();
        }

        let mut map = Map::new();
        map.insert("name".to_string(), Value::String(short_type_name::<E>()));
        map.insert("message".to_string(), Value::String(message));
        map.insert(STACK_KEY.to_string(), Value::String(stack));
        Value::Object(map)
    }

    /// Build an error value from a message and explicit stack text
    pub fn from_parts(message: impl Into<String>, stack: impl Into<String>) -> Value {
        let mut map = Map::new();
        map.insert("name".to_string(), Value::String("Error".to_string()));
        map.insert("message".to_string(), Value::String(message.into()));
        map.insert(STACK_KEY.to_string(), Value::String(stack.into()));
        Value::Object(map)
    }
}

/// Last path segment of the type name, generics dropped
fn short_type_name<E: ?Sized>() -> String {
    let full = std::any::type_name::<E>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Outer(Inner);

    #[derive(Debug)]
    struct Inner;

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "request failed")
        }
    }

    impl fmt::Display for Inner {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "connection reset")
        }
    }

    impl Error for Inner {}

    impl Error for Outer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_capture_includes_source_chain() {
        let value = ErrorValue::capture(&Outer(Inner));
        assert_eq!(value["name"], "Outer");
        assert_eq!(value["message"], "request failed");
        assert_eq!(
            value["stack"],
            "request failed\n    caused by: connection reset"
        );
    }

    #[test]
    fn test_capture_io_error() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.toml");
        let value = ErrorValue::capture(&err);
        assert_eq!(value["name"], "Error");
        assert_eq!(value["message"], "missing.toml");
        assert_eq!(value["stack"], "missing.toml");
    }

    #[test]
    fn test_short_type_name_drops_path_and_generics() {
        assert_eq!(short_type_name::<std::fmt::Error>(), "Error");
        assert_eq!(short_type_name::<Outer>(), "Outer");
        assert_eq!(short_type_name::<Box<std::io::Error>>(), "Box");
    }

    #[test]
    fn test_from_parts() {
        let value = ErrorValue::from_parts("boom", "Error: boom\n    at main.rs:3");
        assert_eq!(value["stack"], "Error: boom\n    at main.rs:3");
    }
}
