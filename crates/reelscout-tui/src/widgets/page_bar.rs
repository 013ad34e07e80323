//! Pagination bar widget.
//!
//! Lays out `First Prev 1 2 [3] 4 5 Next Last` (or the compact
//! `≪ ‹ … 2 [3] 4 … › ≫`) as spans and remembers where each button landed
//! so mouse clicks can be mapped back to a page.

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};
use reelscout_core::window::PageSlot;

const ACTIVE: Color = Color::Rgb(0xab, 0x8b, 0xff); // #ab8bff
const ACTIVE_TEXT: Color = Color::Rgb(0x03, 0x00, 0x14); // #030014
const ENABLED: Color = Color::Rgb(0xa8, 0xb5, 0xdb); // #a8b5db
const DISABLED: Color = Color::Rgb(0x4a, 0x47, 0x6b); // #4a476b

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButton {
    First,
    Prev,
    Page(u32),
    Ellipsis,
    Next,
    Last,
}

impl PageButton {
    /// Page this button navigates to, `None` for the ellipsis
    #[must_use]
    pub fn target(self, current: u32, total: u32) -> Option<u32> {
        match self {
            Self::First => Some(1),
            Self::Prev => Some(current.saturating_sub(1).max(1)),
            Self::Page(n) => Some(n),
            Self::Ellipsis => None,
            Self::Next => Some((current + 1).min(total.max(1))),
            Self::Last => Some(total.max(1)),
        }
    }
}

#[derive(Debug, Clone)]
struct Placed {
    button: PageButton,
    label: String,
    enabled: bool,
    start: u16,
}

/// A laid-out pagination bar
#[derive(Debug, Clone)]
pub struct PageBar {
    current: u32,
    placed: Vec<Placed>,
    width: u16,
}

impl PageBar {
    /// Lay out the bar for `slots`.
    ///
    /// `compact` switches the navigation labels to single glyphs. First and
    /// Prev are disabled on page 1; Next and Last on the last page.
    #[must_use]
    pub fn new(slots: &[PageSlot], current: u32, total: u32, compact: bool) -> Self {
        let at_start = current <= 1;
        let at_end = current >= total;
        let (first, prev, next, last) = if compact {
            ("≪", "‹", "›", "≫")
        } else {
            ("First", "Prev", "Next", "Last")
        };

        let mut buttons = vec![
            (PageButton::First, first.to_string(), !at_start),
            (PageButton::Prev, prev.to_string(), !at_start),
        ];
        for slot in slots {
            buttons.push(match *slot {
                PageSlot::Page(n) if n == current => (PageButton::Page(n), format!("[{n}]"), true),
                PageSlot::Page(n) => (PageButton::Page(n), format!(" {n} "), true),
                PageSlot::Ellipsis => (PageButton::Ellipsis, "...".to_string(), false),
            });
        }
        buttons.push((PageButton::Next, next.to_string(), !at_end));
        buttons.push((PageButton::Last, last.to_string(), !at_end));

        let mut placed = Vec::with_capacity(buttons.len());
        let mut x: u16 = 0;
        for (button, label, enabled) in buttons {
            if !placed.is_empty() {
                x = x.saturating_add(1);
            }
            let len = u16::try_from(label.chars().count()).unwrap_or(u16::MAX);
            placed.push(Placed {
                button,
                label,
                enabled,
                start: x,
            });
            x = x.saturating_add(len);
        }

        Self {
            current,
            placed,
            width: x,
        }
    }

    /// Convenience for the fixed window, which never has ellipses
    #[must_use]
    pub fn fixed(pages: &[u32], current: u32, total: u32) -> Self {
        let slots: Vec<PageSlot> = pages.iter().copied().map(PageSlot::Page).collect();
        Self::new(&slots, current, total, false)
    }

    /// Total width in columns
    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[must_use]
    pub fn spans(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::with_capacity(self.placed.len() * 2);
        for (i, p) in self.placed.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let style = match p.button {
                PageButton::Page(n) if n == self.current => Style::default()
                    .fg(ACTIVE_TEXT)
                    .bg(ACTIVE)
                    .add_modifier(Modifier::BOLD),
                _ if p.enabled => Style::default().fg(ENABLED),
                _ => Style::default().fg(DISABLED),
            };
            spans.push(Span::styled(p.label.clone(), style));
        }
        spans
    }

    /// Button under `column` (relative to the bar's first column).
    ///
    /// Disabled buttons, gaps and the ellipsis do not hit.
    #[must_use]
    pub fn hit_test(&self, column: u16) -> Option<PageButton> {
        self.placed
            .iter()
            .filter(|p| p.enabled)
            .find(|p| {
                let len = u16::try_from(p.label.chars().count()).unwrap_or(u16::MAX);
                column >= p.start && column < p.start.saturating_add(len)
            })
            .map(|p| p.button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(bar: &PageBar) -> String {
        bar.spans().iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_fixed_bar_layout() {
        let bar = PageBar::fixed(&[1, 2, 3, 4, 5], 3, 50);
        assert_eq!(text(&bar), "First Prev  1   2  [3]  4   5  Next Last");
        assert_eq!(bar.width(), u16::try_from(text(&bar).chars().count()).unwrap());
    }

    #[test]
    fn test_compact_bar_layout() {
        let slots = [
            PageSlot::Ellipsis,
            PageSlot::Page(9),
            PageSlot::Page(10),
            PageSlot::Page(11),
            PageSlot::Ellipsis,
        ];
        let bar = PageBar::new(&slots, 10, 20, true);
        assert_eq!(text(&bar), "≪ ‹ ...  9  [10]  11  ... › ≫");
    }

    #[test]
    fn test_hit_test_maps_columns_to_buttons() {
        let bar = PageBar::fixed(&[1, 2, 3], 2, 3);
        // "First Prev  1  [2]  3  Next Last"
        assert_eq!(bar.hit_test(0), Some(PageButton::First));
        assert_eq!(bar.hit_test(5), None);
        assert_eq!(bar.hit_test(6), Some(PageButton::Prev));
        assert_eq!(bar.hit_test(12), Some(PageButton::Page(1)));
        assert_eq!(bar.hit_test(15), Some(PageButton::Page(2)));
        assert_eq!(bar.hit_test(bar.width()), None);
    }

    #[test]
    fn test_disabled_buttons_do_not_hit() {
        let bar = PageBar::fixed(&[1, 2], 1, 2);
        assert_eq!(bar.hit_test(0), None);
        assert_eq!(bar.hit_test(6), None);

        let bar = PageBar::new(&[PageSlot::Ellipsis], 1, 1, true);
        // "≪ ‹ ... › ≫"
        assert_eq!(bar.hit_test(4), None);
    }

    #[test]
    fn test_button_targets() {
        assert_eq!(PageButton::First.target(7, 20), Some(1));
        assert_eq!(PageButton::Prev.target(1, 20), Some(1));
        assert_eq!(PageButton::Prev.target(7, 20), Some(6));
        assert_eq!(PageButton::Next.target(20, 20), Some(20));
        assert_eq!(PageButton::Last.target(7, 20), Some(20));
        assert_eq!(PageButton::Ellipsis.target(7, 20), None);
    }
}
