//! Boxed layout for error fields in console output
//!
//! ```text
//! ┌ error ───────────────────────────────────────────
//! │ request failed
//! │     caused by: connection reset
//! └─────────────────────────────────────────────────
//! ```

use super::style::{ALERT, Painter};

pub const TOP_CORNER: &str = "┌ ";
pub const BOTTOM_CORNER: &str = "└";
pub const BAR: &str = "│ ";
pub const RULE: &str = "─";

/// Columns taken by the header before the rule: corner, key and one space
pub fn header_prefix_len(key: &str) -> usize {
    TOP_CORNER.chars().count() + key.chars().count() + 1
}

/// Columns taken by the footer before the rule
pub const FOOTER_PREFIX_LEN: usize = 1;

/// Render one error box `width` columns wide.
///
/// The body gets one `│ `-prefixed line per line of `text`; an empty text
/// produces a box with no body lines. The result has no trailing newline.
pub fn render_error_box(key: &str, text: &str, width: usize, painter: &Painter) -> String {
    let header_rule = RULE.repeat(width.saturating_sub(header_prefix_len(key)));
    let footer_rule = RULE.repeat(width.saturating_sub(FOOTER_PREFIX_LEN));

    let mut lines = Vec::new();
    lines.push(painter.paint(&format!("{TOP_CORNER}{key} {header_rule}"), ALERT));
    for line in text.lines() {
        lines.push(format!("{}{}", painter.paint(BAR, ALERT), line));
    }
    lines.push(painter.paint(&format!("{BOTTOM_CORNER}{footer_rule}"), ALERT));
    lines.join("\n")
}
