//! Main browse view: banner, search, sorting, trending strip, grid and pages.

use super::gallery::render_gallery;
use super::grid::render_grid;
use super::helpers::{render_help_bar, section_block};
use super::pagination::render_pagination;
use crate::app::App;
use crate::colors;
use crate::state::Focus;
use reelscout_core::gallery::Layout as GalleryLayout;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

const PLACEHOLDER: &str = "Search for movies, actors, directors...";

/// Render the browse screen.
pub fn render_browse(f: &mut Frame, app: &mut App) {
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(colors::BG)), area);

    app.compact = area.width < app.compact_breakpoint;
    app.gallery.set_layout(if app.compact {
        GalleryLayout::Narrow
    } else {
        GalleryLayout::Wide
    });

    let show_landing = app.landing_visible();
    let show_sorting = app.browse.options().enable_sorting;
    let show_gallery = app.gallery_visible();
    let show_pagination = app.browse.show_pagination();

    let mut constraints = Vec::with_capacity(7);
    if show_landing {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Length(3));
    if show_sorting {
        constraints.push(Constraint::Length(1));
    }
    if show_gallery {
        constraints.push(Constraint::Length(4));
    }
    constraints.push(Constraint::Min(5));
    if show_pagination {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);
    let mut slots = chunks.iter().copied();
    let mut next = || slots.next().unwrap_or_default();

    if show_landing {
        render_landing(f, next());
    }
    render_search(f, app, next());
    if show_sorting {
        render_sort_bar(f, app, next());
    }
    app.gallery_area = None;
    if show_gallery {
        render_gallery(f, app, next());
    }
    render_grid(f, app, next());
    app.page_bar = None;
    if show_pagination {
        render_pagination(f, app, next());
    }

    let keys: &[(&str, &str)] = match app.focus {
        Focus::Search => &[
            ("Tab", "focus"),
            ("PgUp/PgDn", "page"),
            ("F2/F3", "sort"),
            ("Esc", "clear/quit"),
        ],
        Focus::Gallery => &[
            ("</>", "scroll"),
            ("Enter", "details"),
            ("Tab", "focus"),
            ("q", "quit"),
        ],
        Focus::Grid => &[
            ("<>^v/hjkl", "nav"),
            ("Enter", "details"),
            ("s/d", "sort"),
            ("q", "quit"),
        ],
        Focus::Pagination => &[
            ("</>", "prev/next"),
            ("Home/End", "first/last"),
            ("Tab", "focus"),
            ("q", "quit"),
        ],
    };
    render_help_bar(f, area, keys);
}

fn render_landing(f: &mut Frame, area: Rect) {
    let white = Style::default()
        .fg(colors::ON_SURFACE)
        .add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(vec![
            Span::styled("Discover Your Next ", white),
            Span::styled(
                "Favorite Movie",
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            "Explore thousands of movies, find ratings, reviews, and recommendations.",
            Style::default().fg(colors::SUBTEXT),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        Rect::new(area.x, area.y + 1, area.width, area.height.saturating_sub(1)),
    );
}

// Cursor column is bounded by the input box width
#[allow(clippy::cast_possible_truncation)]
fn render_search(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Search;
    let block = section_block("Search", focused);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let line = if app.input.is_empty() {
        Line::from(Span::styled(PLACEHOLDER, Style::default().fg(colors::OUTLINE)))
    } else {
        Line::from(Span::styled(
            app.input.as_str(),
            Style::default().fg(colors::ON_SURFACE),
        ))
    };
    f.render_widget(Paragraph::new(line), inner);

    if focused {
        let column = (app.cursor_position as u16).min(inner.width.saturating_sub(1));
        f.set_cursor_position(Position::new(inner.x + column, inner.y));
    }
}

fn render_sort_bar(f: &mut Frame, app: &App, area: Rect) {
    let search = app.browse.search();
    let searching = app.browse.descriptor().search_text().is_some();
    let value_style = if searching {
        Style::default().fg(colors::OUTLINE)
    } else {
        Style::default()
            .fg(colors::PRIMARY_CONTAINER)
            .add_modifier(Modifier::BOLD)
    };
    let arrow = match search.sort_direction {
        reelscout_core::SortDirection::Asc => "▲",
        reelscout_core::SortDirection::Desc => "▼",
    };

    let mut spans = vec![
        Span::styled(" Sort by ", Style::default().fg(colors::SUBTEXT)),
        Span::styled(search.sort_field.label(), value_style),
        Span::raw(" "),
        Span::styled(
            format!("{arrow} {}", search.sort_direction.label()),
            value_style,
        ),
    ];
    if searching {
        spans.push(Span::styled(
            "  (search results use relevance)",
            Style::default().fg(colors::OUTLINE),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
