//! Per-call log records and the metadata they are built from

mod metadata;

pub use metadata::Metadata;

use crate::level::Level;
use chrono::{DateTime, Local, SecondsFormat, Utc};
use serde_json::Value;

/// Field names stamped into every record
pub mod keys {
    pub const TIME: &str = "time";
    pub const LEVEL: &str = "level";
    pub const TEMPLATE: &str = "template";
    pub const MESSAGE: &str = "message";
    pub const MODULE: &str = "module";
}

/// Label used by the console renderer when no `module` field is set
pub const GLOBAL_MODULE: &str = "global";

/// The working structure of one log call.
///
/// Holds the ambient metadata merged with the call-site metadata plus the
/// injected `time`, `level`, `template` and (once rendered) `message`
/// fields. Built fresh per call and dropped after rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    time: DateTime<Local>,
    level: Level,
    fields: Metadata,
}

impl Record {
    /// Merge `ambient` with `call` (call wins) and stamp time, level and template
    pub fn new(
        ambient: &Metadata,
        call: &Metadata,
        time: DateTime<Local>,
        level: Level,
        template: &str,
    ) -> Self {
        let mut fields = ambient.merged(call);
        fields.insert(keys::TIME, Value::String(format_time_utc(&time)));
        fields.insert(keys::LEVEL, level.as_str());
        fields.insert(keys::TEMPLATE, template);
        Self {
            time,
            level,
            fields,
        }
    }

    /// Store the rendered message text
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.fields
            .insert(keys::MESSAGE, Value::String(message.into()));
    }

    pub fn time(&self) -> DateTime<Local> {
        self.time
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn template(&self) -> &str {
        self.str_field(keys::TEMPLATE).unwrap_or_default()
    }

    /// Rendered message, empty until [`Record::set_message`] is called
    pub fn message(&self) -> &str {
        self.str_field(keys::MESSAGE).unwrap_or_default()
    }

    /// Module label, if one was set through context
    pub fn module(&self) -> Option<&str> {
        self.str_field(keys::MODULE)
    }

    /// All fields, including the stamped ones
    pub fn fields(&self) -> &Metadata {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

/// RFC 3339 in UTC with millisecond precision, e.g. `2024-03-01T08:05:09.120Z`
pub fn format_time_utc(time: &DateTime<Local>) -> String {
    time.with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}
