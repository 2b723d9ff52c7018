//! Newline-delimited JSON renderer

use serde_json::{Map, Value};
use stencil_application::RecordRenderer;
use stencil_domain::{FieldFormatter, FieldPolicy, Record};

/// Renders each record as one compact JSON object per line.
///
/// Every field passes through the field formatter, so error-kind fields
/// carry their stack text instead of the raw error object.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        Self
    }

    /// The JSON object for `record`, before serialization
    pub fn to_value(record: &Record, policy: &FieldPolicy) -> Value {
        let fields: Map<String, Value> = record
            .fields()
            .iter()
            .map(|(key, value)| {
                (
                    key.clone(),
                    FieldFormatter::format_json(policy.kind_for(key), value),
                )
            })
            .collect();
        Value::Object(fields)
    }
}

impl RecordRenderer for JsonRenderer {
    fn render(&self, record: &Record, policy: &FieldPolicy) -> String {
        let mut line = serde_json::to_string(&Self::to_value(record, policy))
            .unwrap_or_else(|_| "{}".to_string());
        line.push('\n');
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use stencil_domain::{ErrorValue, FieldKind, Level, Metadata};

    fn record(fields: Value) -> Record {
        let time = Utc
            .with_ymd_and_hms(2024, 3, 1, 8, 5, 9)
            .unwrap()
            .with_timezone(&chrono::Local);
        let mut record = Record::new(&Metadata::new(), &Metadata::from(fields), time, Level::Info, "x");
        record.set_message("x");
        record
    }

    #[test]
    fn test_single_line_with_all_fields() {
        let out = JsonRenderer.render(&record(json!({"user": {"id": 7}})), &FieldPolicy::default());
        assert!(out.ends_with('\n'));
        assert_eq!(out.trim_end().lines().count(), 1);

        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["time"], "2024-03-01T08:05:09.000Z");
        assert_eq!(value["level"], "info");
        assert_eq!(value["template"], "x");
        assert_eq!(value["message"], "x");
        assert_eq!(value["user"], json!({"id": 7}));
    }

    #[test]
    fn test_error_field_becomes_stack_text() {
        let err = ErrorValue::from_parts("boom", "Error: boom\n    at main");
        let policy = FieldPolicy::default().with("err", FieldKind::Error);
        let out = JsonRenderer.render(&record(json!({"err": err})), &policy);

        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["err"], "Error: boom\n    at main");
    }

    #[test]
    fn test_error_field_without_stack_uses_string_form() {
        let policy = FieldPolicy::default();
        let out = JsonRenderer.render(&record(json!({"error": "plain failure"})), &policy);
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["error"], "plain failure");
    }

    #[test]
    fn test_captured_error_without_policy_keeps_shape() {
        let err = std::io::Error::other("disk full");
        let policy = FieldPolicy::empty();
        let out = JsonRenderer.render(&record(json!({"error": ErrorValue::capture(&err)})), &policy);
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["error"]["name"], "Error");
        assert_eq!(value["error"]["message"], "disk full");
    }

    #[test]
    fn test_key_order_follows_record() {
        let out = JsonRenderer.render(&record(json!({"b": 1, "a": 2})), &FieldPolicy::default());
        assert!(out.starts_with(r#"{"b":1,"a":2,"time":"#));
    }
}
