//! Compilation of message templates into reusable renderers

use super::eval::evaluate;
use super::expr::{self, Expr};
use crate::TemplateError;
use crate::field::display_value;
use crate::record::Metadata;
use regex::Regex;
use std::sync::LazyLock;

/// `@{expr}` or `@identifier`; an `@` followed by anything else is literal text.
static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@\{([^}]+)\}|@([a-zA-Z]+)").expect("marker regex is valid")
});

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Text(String),
    Field(String),
    Block(Expr),
}

/// A template parsed once and rendered many times.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl CompiledTemplate {
    /// Parse `template` into literal text, field references and expression blocks.
    ///
    /// Fails only when an `@{...}` block is not a valid expression.
    pub fn compile(template: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut last = 0;

        for captures in MARKER.captures_iter(template) {
            let Some(whole) = captures.get(0) else {
                continue;
            };
            if whole.start() > last {
                segments.push(Segment::Text(template[last..whole.start()].to_string()));
            }

            if let Some(block) = captures.get(1) {
                let expr = expr::parse(block.as_str()).map_err(|e| TemplateError::Syntax {
                    template: template.to_string(),
                    position: block.start() + e.position,
                    reason: e.reason,
                })?;
                segments.push(Segment::Block(expr));
            } else if let Some(name) = captures.get(2) {
                segments.push(Segment::Field(name.as_str().to_string()));
            }
            last = whole.end();
        }

        if last < template.len() {
            segments.push(Segment::Text(template[last..].to_string()));
        }

        Ok(Self {
            source: template.to_string(),
            segments,
        })
    }

    /// The template string this was compiled from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// True when the template contains no substitutions at all
    pub fn is_static(&self) -> bool {
        self.segments
            .iter()
            .all(|segment| matches!(segment, Segment::Text(_)))
    }

    /// Render against the fields of a record.
    ///
    /// Field references never fail; an expression block that fails to
    /// evaluate aborts the render.
    pub fn render(&self, fields: &Metadata) -> Result<String, TemplateError> {
        let mut out = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Field(name) => {
                    if let Some(value) = fields.get(name) {
                        out.push_str(&display_value(value));
                    }
                }
                Segment::Block(expr) => {
                    let value = evaluate(expr, fields).map_err(|reason| TemplateError::Eval {
                        template: self.source.clone(),
                        reason,
                    })?;
                    out.push_str(&display_value(&value));
                }
            }
        }
        Ok(out)
    }
}
