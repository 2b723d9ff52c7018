//! Human readable console renderer

use super::error_box::render_error_box;
use super::style::{ACCENT, FIELD_KEY, Painter, level_color};
use super::terminal::WidthSource;
use stencil_application::RecordRenderer;
use stencil_domain::{FieldFormatter, FieldKind, FieldPolicy, GLOBAL_MODULE, Record, keys};

/// Timestamp layout, e.g. `2024/03/01-08:05:09`
pub const TIME_FORMAT: &str = "%Y/%m/%d-%H:%M:%S";

/// Fields printed in the line prefix and therefore skipped among the inline fields
const CONSUMED: [&str; 4] = [keys::TIME, keys::LEVEL, keys::MESSAGE, keys::MODULE];

/// Renders records as colorized console lines.
///
/// ```text
/// 2024/03/01-08:05:09 info db> connected template: "connected" pool: 4
/// ```
///
/// Error-kind fields are drawn as boxes below the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConsoleRenderer {
    painter: Painter,
    width: WidthSource,
}

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn colors on or off
    pub fn with_color(mut self, enabled: bool) -> Self {
        self.painter = Painter::new(enabled);
        self
    }

    pub fn with_width(mut self, width: WidthSource) -> Self {
        self.width = width;
        self
    }

    fn prefix(&self, record: &Record) -> String {
        let time = record.time().format(TIME_FORMAT).to_string();
        let level = record.level();
        let module = record.module().unwrap_or(GLOBAL_MODULE);

        format!(
            "{} {} {} {}",
            self.painter.paint(&time, ACCENT),
            self.painter.paint(level.as_str(), level_color(level)),
            self.painter.paint(&format!("{module}>"), ACCENT),
            record.message()
        )
    }
}

impl RecordRenderer for ConsoleRenderer {
    fn render(&self, record: &Record, policy: &FieldPolicy) -> String {
        let mut inline = Vec::new();
        let mut errors = Vec::new();

        for (key, value) in record.fields() {
            if CONSUMED.contains(&key.as_str()) {
                continue;
            }
            match policy.kind_for(key) {
                FieldKind::Info => inline.push(format!(
                    "{}: {}",
                    self.painter.paint(key, FIELD_KEY),
                    value
                )),
                FieldKind::Error => errors.push((key, FieldFormatter::error_text(value))),
            }
        }

        let mut out = self.prefix(record);
        if !inline.is_empty() {
            out.push(' ');
            out.push_str(&inline.join(" "));
        }

        if !errors.is_empty() {
            let width = self.width.width();
            let boxes: Vec<String> = errors
                .iter()
                .map(|(key, text)| render_error_box(key, text, width, &self.painter))
                .collect();
            out.push('\n');
            out.push_str(&boxes.join("\n\n"));
        }

        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use serde_json::json;
    use stencil_domain::{ErrorValue, Level, Metadata};

    fn renderer() -> ConsoleRenderer {
        ConsoleRenderer::new()
            .with_color(false)
            .with_width(WidthSource::Fixed(30))
    }

    fn record(level: Level, template: &str, message: &str, fields: serde_json::Value) -> Record {
        let time = Local.with_ymd_and_hms(2024, 3, 1, 8, 5, 9).unwrap();
        let mut record = Record::new(
            &Metadata::new(),
            &Metadata::from(fields),
            time,
            level,
            template,
        );
        record.set_message(message);
        record
    }

    #[test]
    fn test_basic_line() {
        let rec = record(Level::Info, "Hello @name", "Hello World", json!({"name": "World"}));
        let out = renderer().render(&rec, &FieldPolicy::default());
        assert_eq!(
            out,
            "2024/03/01-08:05:09 info global> Hello World name: \"World\" template: \"Hello @name\"\n"
        );
    }

    #[test]
    fn test_module_tag() {
        let rec = record(Level::Warn, "x", "x", json!({"module": "db/pool"}));
        let out = renderer().render(&rec, &FieldPolicy::default());
        assert!(out.starts_with("2024/03/01-08:05:09 warn db/pool> x "));
        assert!(!out.contains("module:"));
    }

    #[test]
    fn test_inline_values_are_json() {
        let rec = record(
            Level::Debug,
            "t",
            "t",
            json!({"n": 4, "ok": true, "obj": {"a": [1, 2]}}),
        );
        let out = renderer().render(&rec, &FieldPolicy::default());
        assert!(out.contains(r#"n: 4 ok: true obj: {"a":[1,2]}"#));
    }

    #[test]
    fn test_error_field_boxed() {
        let err = ErrorValue::from_parts("boom", "Error: boom\n    at handler\n    at main");
        let rec = record(Level::Error, "failed", "failed", json!({"error": err, "user": "ada"}));
        let out = renderer().render(&rec, &FieldPolicy::default());
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(
            lines[0],
            "2024/03/01-08:05:09 error global> failed user: \"ada\" template: \"failed\""
        );
        assert_eq!(lines[1], format!("┌ error {}", "─".repeat(30 - 8)));
        assert_eq!(lines[2], "│ Error: boom");
        assert_eq!(lines[3], "│     at handler");
        assert_eq!(lines[4], "│     at main");
        assert_eq!(lines[5], format!("└{}", "─".repeat(29)));
        assert_eq!(lines.len(), 6);
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_multiple_error_boxes_separated_by_blank_line() {
        let policy = FieldPolicy::default().with("cause", FieldKind::Error);
        let rec = record(
            Level::Crit,
            "x",
            "x",
            json!({"error": "first", "cause": "second"}),
        );
        let out = renderer().render(&rec, &policy);
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[1].starts_with("┌ error "));
        assert_eq!(lines[2], "│ first");
        assert!(lines[3].starts_with('└'));
        assert_eq!(lines[4], "");
        assert!(lines[5].starts_with("┌ cause "));
        assert_eq!(lines[6], "│ second");
    }

    #[test]
    fn test_falsy_error_has_empty_body() {
        let rec = record(Level::Error, "x", "x", json!({"error": null}));
        let out = renderer().render(&rec, &FieldPolicy::default());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("┌ error"));
        assert!(lines[2].starts_with('└'));
    }

    #[test]
    fn test_error_key_plain_when_policy_says_info() {
        let rec = record(Level::Error, "x", "x", json!({"error": "inline"}));
        let out = renderer().render(&rec, &FieldPolicy::empty());
        assert_eq!(out.lines().count(), 1);
        assert!(out.contains("error: \"inline\""));
    }
}
