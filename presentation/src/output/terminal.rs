//! Terminal width detection for the console renderer

use std::io::IsTerminal;

/// Width used when stdout is not an interactive terminal
pub const DEFAULT_FALLBACK_WIDTH: u16 = 50;

/// Where the console renderer gets its line width from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthSource {
    /// Ask the terminal on every render, use `fallback` when stdout is
    /// not a terminal or the size cannot be queried
    Detect { fallback: u16 },
    /// Always use this width
    Fixed(u16),
}

impl Default for WidthSource {
    fn default() -> Self {
        WidthSource::Detect {
            fallback: DEFAULT_FALLBACK_WIDTH,
        }
    }
}

impl WidthSource {
    /// Current width in columns
    pub fn width(&self) -> usize {
        match *self {
            WidthSource::Fixed(width) => usize::from(width),
            WidthSource::Detect { fallback } => usize::from(detect_columns().unwrap_or(fallback)),
        }
    }
}

fn detect_columns() -> Option<u16> {
    if !std::io::stdout().is_terminal() {
        return None;
    }
    crossterm::terminal::size()
        .ok()
        .map(|(columns, _)| columns)
        .filter(|columns| *columns > 0)
}
