//! Pagination bar rendering.

use super::helpers::section_block;
use crate::app::App;
use crate::state::Focus;
use crate::widgets::PageBar;
use ratatui::{Frame, layout::Rect, text::Line, widgets::Paragraph};

/// Fixed window on wide terminals, compact window below the breakpoint.
pub fn render_pagination(f: &mut Frame, app: &mut App, area: Rect) {
    let current = app.browse.current_page();
    let total = app.browse.effective_total_pages();
    let bar = if app.compact {
        PageBar::new(&app.browse.compact_window(), current, total, true)
    } else {
        PageBar::fixed(&app.browse.fixed_window(), current, total)
    };

    let title = format!("Page {current} of {total}");
    let block = section_block(&title, app.focus == Focus::Pagination);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let width = bar.width().min(inner.width);
    let bar_area = Rect::new(
        inner.x + (inner.width - width) / 2,
        inner.y,
        width,
        inner.height.min(1),
    );
    f.render_widget(Paragraph::new(Line::from(bar.spans())), bar_area);
    app.page_bar = Some((bar_area, bar));
}
