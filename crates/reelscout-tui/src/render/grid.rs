//! Movie grid rendering.

use super::helpers::{fit_width, section_block};
use crate::app::App;
use crate::colors;
use crate::state::Focus;
use crate::widgets::render_chip;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use reelscout_core::{FetchStatus, Movie};

const CARD_WIDTH: usize = 28;
const LINES_PER_CARD: u16 = 3;

fn card_lines(movie: &Movie, selected: bool, width: usize) -> [Vec<Span<'static>>; 2] {
    let bg = if selected {
        colors::SURFACE_HIGH
    } else {
        colors::SURFACE
    };
    let title_style = if selected {
        Style::default()
            .fg(colors::PRIMARY)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(colors::ON_SURFACE)
            .add_modifier(Modifier::BOLD)
    };
    let title = vec![Span::styled(
        fit_width(&format!(" {}", movie.title), width),
        title_style,
    )];

    let chips = [
        render_chip(&movie.rating_label(), Some('★'), Some(colors::RATING)),
        render_chip(&movie.language_label(), None, None),
        render_chip(movie.release_year(), None, None),
    ];
    let mut meta = vec![Span::styled(" ", Style::default().bg(bg))];
    let mut used = 1;
    for chip in chips {
        let len = chip.content.chars().count() + 1;
        if used + len > width {
            break;
        }
        used += len;
        meta.push(chip.patch_style(Style::default().bg(bg)));
        meta.push(Span::styled(" ", Style::default().bg(bg)));
    }
    meta.push(Span::styled(
        " ".repeat(width.saturating_sub(used)),
        Style::default().bg(bg),
    ));

    [title, meta]
}

fn render_message(f: &mut Frame, area: Rect, text: &str, style: Style) {
    let y = area.y + area.height / 2;
    f.render_widget(
        Paragraph::new(Span::styled(text.to_string(), style)).alignment(Alignment::Center),
        Rect::new(area.x, y.min(area.y + area.height.saturating_sub(1)), area.width, 1),
    );
}

/// Render the grid of movie cards.
///
/// Records where the grid landed in `app.results_area`; it stays `None`
/// while a page is loading.
pub fn render_grid(f: &mut Frame, app: &mut App, area: Rect) {
    let title = match app.browse.descriptor().search_text() {
        Some(text) => format!("Results for \"{text}\""),
        None => "All Movies".to_string(),
    };
    let block = section_block(&title, app.focus == Focus::Grid);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let store = app.browse.store();
    if matches!(store.status(), FetchStatus::Loading | FetchStatus::Idle) {
        app.results_area = None;
        render_message(
            f,
            inner,
            "Loading movies...",
            Style::default().fg(colors::SUBTEXT),
        );
        return;
    }
    let error = store.error_message().map(str::to_string);
    let empty = store.items().is_empty();
    app.results_area = Some(inner);

    if let Some(message) = error {
        render_message(f, inner, &message, Style::default().fg(colors::ERROR));
        return;
    }
    if empty {
        render_message(
            f,
            inner,
            "No movies found.",
            Style::default().fg(colors::SUBTEXT),
        );
        return;
    }

    let columns = (usize::from(inner.width) / CARD_WIDTH).max(1);
    app.grid.set_columns(columns);
    let cell_width = usize::from(inner.width) / columns;
    let visible_rows = usize::from((inner.height / LINES_PER_CARD).max(1));
    let selected_row = app.grid.row();
    let scroll_offset = selected_row.saturating_sub(visible_rows - 1);
    let highlight = app.focus == Focus::Grid;

    let movies = app.browse.store().items();
    let mut y = inner.y;
    for row in scroll_offset..scroll_offset + visible_rows {
        if y + 1 >= inner.y + inner.height {
            break;
        }
        let mut title_spans: Vec<Span> = Vec::new();
        let mut meta_spans: Vec<Span> = Vec::new();
        for col in 0..columns {
            let idx = row * columns + col;
            let Some(movie) = movies.get(idx) else {
                break;
            };
            let selected = highlight && idx == app.grid.selected;
            let [title, meta] = card_lines(movie, selected, cell_width);
            title_spans.extend(title);
            meta_spans.extend(meta);
        }
        if title_spans.is_empty() {
            break;
        }
        f.render_widget(
            Paragraph::new(Line::from(title_spans)),
            Rect::new(inner.x, y, inner.width, 1),
        );
        f.render_widget(
            Paragraph::new(Line::from(meta_spans)),
            Rect::new(inner.x, y + 1, inner.width, 1),
        );
        y += LINES_PER_CARD;
    }
}

/// Index of the card under a terminal cell, if any
pub fn card_at(app: &App, column: u16, row: u16) -> Option<usize> {
    let area = app.results_area?;
    if !area.contains(ratatui::layout::Position::new(column, row)) {
        return None;
    }
    let columns = app.grid.columns.max(1);
    let cell_width = (usize::from(area.width) / columns).max(1);
    let visible_rows = usize::from((area.height / LINES_PER_CARD).max(1));
    let scroll_offset = app.grid.row().saturating_sub(visible_rows - 1);

    let col = usize::from(column - area.x) / cell_width;
    let row = usize::from((row - area.y) / LINES_PER_CARD) + scroll_offset;
    let idx = row * columns + col.min(columns - 1);
    (idx < app.movies().len()).then_some(idx)
}
