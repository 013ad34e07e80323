//! Chip widget for TUI.
//!
//! Chips are small tags shown under a movie title: rating, year, language.
//!
//! ASCII representation: `(text)` or `(icon text)`

use ratatui::{
    style::{Color, Style},
    text::Span,
};

/// Default chip color (matches `colors::SUBTEXT`)
const DEFAULT_COLOR: Color = Color::Rgb(0xa8, 0xb5, 0xdb); // #a8b5db

struct Chip<'a> {
    text: &'a str,
    icon: Option<char>,
    color: Color,
}

impl Chip<'_> {
    fn content(&self) -> String {
        match self.icon {
            Some(icon) => format!("({icon} {})", self.text),
            None => format!("({})", self.text),
        }
    }

    fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn to_span(&self) -> Span<'static> {
        if self.is_empty() {
            Span::raw("")
        } else {
            Span::styled(self.content(), Style::default().fg(self.color))
        }
    }
}

/// Renders a metadata chip. `color` falls back to the default subtext color.
#[must_use]
pub fn render_chip(text: &str, icon: Option<char>, color: Option<Color>) -> Span<'static> {
    Chip {
        text,
        icon,
        color: color.unwrap_or(DEFAULT_COLOR),
    }
    .to_span()
}
