//! Helper rendering functions shared across views.

use crate::colors;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Truncate to `max_chars` characters, ending in `...` when cut.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Pad or truncate to exactly `width` characters
pub fn fit_width(text: &str, width: usize) -> String {
    format!("{:width$}", truncate_text(text, width))
}

/// Bordered section, highlighted when it has focus
pub fn section_block(title: &str, focused: bool) -> Block<'static> {
    let border = if focused {
        colors::PRIMARY
    } else {
        colors::OUTLINE
    };
    Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(colors::ON_SURFACE)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(colors::SURFACE))
        .border_style(Style::default().fg(border))
}

/// One-line key help at the bottom of `area`
pub fn render_help_bar(f: &mut Frame, area: Rect, keys: &[(&str, &str)]) {
    let help_area = Rect::new(
        area.x,
        area.y + area.height.saturating_sub(1),
        area.width,
        1,
    );
    let mut spans = Vec::with_capacity(keys.len() * 2);
    for (key, action) in keys {
        spans.push(Span::styled(*key, Style::default().fg(colors::PRIMARY)));
        spans.push(Span::styled(
            format!(": {action}  "),
            Style::default().fg(colors::SUBTEXT),
        ));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(colors::SURFACE)),
        help_area,
    );
}
