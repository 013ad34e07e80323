//! Trending strip rendering.

use super::helpers::{fit_width, section_block};
use crate::app::{App, GALLERY_CARD_WIDTH};
use crate::colors;
use crate::state::Focus;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the trending strip and sync the scroller with its geometry.
// Offsets are bounded by the strip width, which fits in u16
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_gallery(f: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.focus == Focus::Gallery;
    let block = section_block("Trending Now", focused);
    let inner = block.inner(area);
    f.render_widget(block, area);
    app.gallery_area = Some(inner);

    let card = usize::from(GALLERY_CARD_WIDTH);
    let strip_width = app.trending.len() as f32 * f32::from(GALLERY_CARD_WIDTH);
    app.gallery.resize(strip_width, f32::from(inner.width));

    let mut titles: Vec<Span> = Vec::with_capacity(app.trending.len());
    let mut counts: Vec<Span> = Vec::with_capacity(app.trending.len());
    for (i, movie) in app.trending.iter().enumerate() {
        let selected = focused && i == app.trending_selected;
        let bg = if selected {
            colors::SURFACE_HIGH
        } else {
            colors::SURFACE
        };
        let rank = format!("{:>2} ", i + 1);
        let title = fit_width(movie.display_title(), card - rank.len() - 1);
        titles.push(Span::styled(
            rank,
            Style::default()
                .fg(colors::PRIMARY)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ));
        titles.push(Span::styled(
            format!("{title} "),
            Style::default().fg(colors::ON_SURFACE).bg(bg),
        ));
        counts.push(Span::styled(
            fit_width(&format!("   {} searches", movie.count), card),
            Style::default().fg(colors::SUBTEXT).bg(bg),
        ));
    }

    let offset = app.gallery.offset().round() as u16;
    f.render_widget(
        Paragraph::new(vec![Line::from(titles), Line::from(counts)]).scroll((0, offset)),
        inner,
    );

    if app.gallery.show_buttons() && inner.width > 2 {
        let arrow = Style::default().fg(colors::PRIMARY).bg(colors::SURFACE_HIGH);
        if app.gallery.can_scroll_left() {
            f.render_widget(
                Paragraph::new(Span::styled("◀", arrow)),
                Rect::new(inner.x, inner.y, 1, 1),
            );
        }
        if app.gallery.can_scroll_right() {
            f.render_widget(
                Paragraph::new(Span::styled("▶", arrow)),
                Rect::new(inner.x + inner.width - 1, inner.y, 1, 1),
            );
        }
    }
}
