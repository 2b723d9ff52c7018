//! Colors used by the console renderer

use colored::{Color, Colorize};
use stencil_domain::Level;

/// Accent for the timestamp and module tag
pub const ACCENT: Color = Color::Blue;
/// Color of inline field keys
pub const FIELD_KEY: Color = Color::Green;
/// Color of error box rules and glyphs
pub const ALERT: Color = Color::Red;

/// Fixed level to color mapping
pub fn level_color(level: Level) -> Color {
    match level {
        Level::Emerg | Level::Alert | Level::Crit | Level::Error => Color::Red,
        Level::Warn => Color::Yellow,
        Level::Notice | Level::Info => Color::White,
        Level::Debug => Color::BrightBlack,
    }
}

/// Applies colors, or nothing when colors are turned off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Painter {
    enabled: bool,
}

impl Default for Painter {
    fn default() -> Self {
        Painter::new(true)
    }
}

impl Painter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }
}
