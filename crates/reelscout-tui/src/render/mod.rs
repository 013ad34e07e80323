//! Rendering functions for the TUI.

mod browse;
mod details;
mod gallery;
mod grid;
mod helpers;
mod pagination;

pub use browse::render_browse;
pub use details::render_details;
pub use grid::card_at;
