//! Field value rendering according to [`FieldKind`]

use super::FieldKind;
use serde_json::Value;

/// Key holding the stack text inside a captured error value
pub const STACK_KEY: &str = "stack";

/// Applies a [`FieldKind`] to a metadata value.
pub struct FieldFormatter;

impl FieldFormatter {
    /// Value as it should appear in a JSON record.
    ///
    /// `error` fields are replaced by their textual stack representation;
    /// everything else is passed through unchanged.
    pub fn format_json(kind: FieldKind, value: &Value) -> Value {
        match kind {
            FieldKind::Info => value.clone(),
            FieldKind::Error => Value::String(Self::error_text(value)),
        }
    }

    /// Textual representation of an error value.
    ///
    /// Prefers a `stack` string, then falls back to a plain string
    /// conversion. Falsy values render as the empty string.
    pub fn error_text(value: &Value) -> String {
        if is_falsy(value) {
            return String::new();
        }
        match value {
            Value::Object(map) => match map.get(STACK_KEY) {
                Some(Value::String(stack)) if !stack.is_empty() => stack.clone(),
                _ => map
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or_else(|| value.to_string()),
            },
            other => display_value(other),
        }
    }
}

/// JavaScript-style truthiness
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// String form used when a value is interpolated into text.
///
/// Strings are emitted raw, `null` as nothing, everything else as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_text_prefers_stack() {
        let value = json!({"message": "boom", "stack": "Error: boom\n    at main"});
        assert_eq!(FieldFormatter::error_text(&value), "Error: boom\n    at main");
    }

    #[test]
    fn test_error_text_falls_back_to_message() {
        let value = json!({"message": "boom"});
        assert_eq!(FieldFormatter::error_text(&value), "boom");
    }

    #[test]
    fn test_error_text_plain_values() {
        assert_eq!(FieldFormatter::error_text(&json!("disk full")), "disk full");
        assert_eq!(FieldFormatter::error_text(&json!(42)), "42");
        assert_eq!(FieldFormatter::error_text(&json!({"code": 7})), r#"{"code":7}"#);
    }

    #[test]
    fn test_error_text_falsy_is_empty() {
        for value in [json!(null), json!(false), json!(0), json!("")] {
            assert_eq!(FieldFormatter::error_text(&value), "");
        }
    }

    #[test]
    fn test_format_json_by_kind() {
        let value = json!({"message": "boom", "stack": "trace"});
        assert_eq!(FieldFormatter::format_json(FieldKind::Info, &value), value);
        assert_eq!(
            FieldFormatter::format_json(FieldKind::Error, &value),
            json!("trace")
        );
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&json!("World")), "World");
        assert_eq!(display_value(&json!(null)), "");
        assert_eq!(display_value(&json!(1.5)), "1.5");
        assert_eq!(display_value(&json!([1, 2])), "[1,2]");
    }
}
