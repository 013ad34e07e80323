//! TUI widgets for reelscout.
//!
//! - [`render_chip`] - Small `(text)` tag for card metadata
//! - [`PageBar`] - Pagination bar with clickable buttons

mod chip;
mod page_bar;

pub use chip::render_chip;
pub use page_bar::{PageBar, PageButton};
