//! Movie detail view rendering.

use super::helpers::{render_help_bar, section_block};
use crate::app::App;
use crate::colors;
use crate::widgets::render_chip;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
};
use reelscout_core::details::{DetailsState, LoadedDetails, youtube_url};

const MAX_CAST: usize = 10;
const NO_POSTER: &str = "No poster available.";

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(colors::PRIMARY)
            .add_modifier(Modifier::BOLD),
    ))
}

fn body(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(
        text.into(),
        Style::default().fg(colors::ON_SURFACE),
    ))
}

pub(crate) fn detail_lines(loaded: &LoadedDetails, poster: Option<String>) -> Vec<Line<'static>> {
    let d = &loaded.details;
    let mut lines = Vec::new();

    if let Some(tagline) = d.tagline.as_deref().filter(|t| !t.is_empty()) {
        lines.push(Line::from(Span::styled(
            tagline.to_string(),
            Style::default()
                .fg(colors::SUBTEXT)
                .add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::default());
    }

    let rating = if d.vote_average > 0.0 {
        format!("{:.1}", d.vote_average)
    } else {
        "N/A".to_string()
    };
    lines.push(Line::from(vec![
        render_chip(&rating, Some('★'), Some(colors::RATING)),
        Span::raw(" "),
        render_chip(d.release_year(), None, None),
        Span::raw(" "),
        render_chip(&d.runtime_label(), None, None),
    ]));

    if !d.genres.is_empty() {
        let genres: Vec<&str> = d.genres.iter().map(|g| g.name.as_str()).collect();
        lines.push(Line::from(Span::styled(
            genres.join(" · "),
            Style::default().fg(colors::PRIMARY_CONTAINER),
        )));
    }
    lines.push(Line::default());

    lines.push(heading("Overview"));
    lines.push(body(
        d.overview
            .clone()
            .filter(|o| !o.is_empty())
            .unwrap_or_else(|| "No overview available.".to_string()),
    ));
    lines.push(Line::default());

    let directors: Vec<&str> = loaded.credits.directors().map(|c| c.name.as_str()).collect();
    if !directors.is_empty() {
        lines.push(heading("Director"));
        lines.push(body(directors.join(", ")));
        lines.push(Line::default());
    }

    if !loaded.credits.cast.is_empty() {
        lines.push(heading("Cast"));
        for member in loaded.credits.cast.iter().take(MAX_CAST) {
            let mut spans = vec![Span::styled(
                format!("  {}", member.name),
                Style::default().fg(colors::ON_SURFACE),
            )];
            if let Some(character) = member.character.as_deref().filter(|c| !c.is_empty()) {
                spans.push(Span::styled(
                    format!(" as {character}"),
                    Style::default().fg(colors::SUBTEXT),
                ));
            }
            lines.push(Line::from(spans));
        }
        lines.push(Line::default());
    }

    lines.push(heading("Trailer"));
    lines.push(match loaded.trailer_key.as_deref() {
        Some(key) => body(youtube_url(key)),
        None => Line::from(Span::styled(
            "No trailer available.",
            Style::default().fg(colors::OUTLINE),
        )),
    });

    lines.push(Line::default());
    lines.push(heading("Poster"));
    lines.push(Line::from(Span::styled(
        poster.unwrap_or_else(|| NO_POSTER.to_string()),
        Style::default().fg(colors::SUBTEXT),
    )));

    lines
}

/// Render the detail view for the open movie.
pub fn render_details(f: &mut Frame, app: &App) {
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(colors::BG)), area);
    let content_area = Rect::new(area.x, area.y, area.width, area.height.saturating_sub(1));

    let (title, lines) = match app.details.state() {
        Some(DetailsState::Loaded(loaded)) => {
            let poster = app.api.poster_url(loaded.details.poster_path.as_deref());
            (loaded.details.title.clone(), detail_lines(loaded, poster))
        }
        Some(DetailsState::Error(message)) => (
            "Movie Details".to_string(),
            vec![Line::from(Span::styled(
                message.clone(),
                Style::default().fg(colors::ERROR),
            ))],
        ),
        Some(DetailsState::Loading) | None => (
            "Movie Details".to_string(),
            vec![Line::from(Span::styled(
                "Loading details...",
                Style::default().fg(colors::SUBTEXT),
            ))],
        ),
    };

    let block = section_block(&title, true);
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((app.details_scroll, 0)),
        content_area,
    );

    render_help_bar(
        f,
        area,
        &[("Esc/b", "back"), ("^v/jk", "scroll"), ("t", "open trailer")],
    );
}
