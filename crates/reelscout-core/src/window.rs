//! Page window calculation for the pagination bar.
//!
//! Both windows are derived on demand from the current page and the capped
//! page count; nothing here is stored.

use serde::{Deserialize, Serialize};

/// Default number of numbered buttons in the wide layout
pub const DEFAULT_WINDOW_WIDTH: u32 = 5;

/// Hard ceiling on reachable pages imposed by the catalog
pub const DEFAULT_PAGE_CAP: u32 = 500;

/// One position in the compact window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageSlot {
    Page(u32),
    Ellipsis,
}

impl PageSlot {
    #[must_use]
    pub fn page(self) -> Option<u32> {
        match self {
            Self::Page(n) => Some(n),
            Self::Ellipsis => None,
        }
    }
}

/// Reported page count clamped to `[1, cap]`
#[must_use]
pub fn effective_total_pages(total_pages: u32, cap: u32) -> u32 {
    total_pages.min(cap).max(1)
}

/// Contiguous run of `width` pages centered on `current`.
///
/// The run is shifted left near the end so it keeps `width` entries
/// whenever `effective_total >= width`. A `current` outside
/// `[1, effective_total]` is treated as the nearest valid page.
#[must_use]
pub fn fixed_window(current: u32, effective_total: u32, width: u32) -> Vec<u32> {
    let width = width.max(1);
    let total = effective_total.max(1);
    let current = current.clamp(1, total);
    let half = width / 2;

    let mut start = current.saturating_sub(half).max(1);
    let end = total.min(start.saturating_add(width - 1));

    if end - start < width - 1 {
        start = end.saturating_sub(width - 1).max(1);
    }

    (start..=end).collect()
}

/// Abbreviated window for narrow layouts: neighbours of `current` plus an
/// ellipsis on each side that has hidden pages.
#[must_use]
pub fn compact_window(current: u32, effective_total: u32) -> Vec<PageSlot> {
    let total = effective_total.max(1);
    let current = current.clamp(1, total);

    if total <= 3 {
        return (1..=total).map(PageSlot::Page).collect();
    }

    let mut slots = Vec::with_capacity(5);
    if current > 2 {
        slots.push(PageSlot::Ellipsis);
    }
    if current > 1 {
        slots.push(PageSlot::Page(current - 1));
    }
    slots.push(PageSlot::Page(current));
    if current < total {
        slots.push(PageSlot::Page(current + 1));
    }
    if current.saturating_add(1) < total {
        slots.push(PageSlot::Ellipsis);
    }
    slots
}
