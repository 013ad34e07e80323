//! Browse and pagination core for reelscout.
//!
//! Everything here is front-end agnostic: the TUI (or any other view)
//! feeds user input into [`BrowseController`] and the other state
//! machines, runs the returned effects through an [`Orchestrator`] and
//! renders from the read-side accessors.

pub mod config;
pub mod debounce;
pub mod details;
pub mod gallery;
pub mod query;
pub mod scroll;
pub mod source;
pub mod store;
pub mod window;

mod browse;
mod error;

#[cfg(test)]
mod tests;

pub use browse::{BrowseController, BrowseOptions, Effect, PaginationState, SearchState};
pub use error::{Error, Result};
pub use source::{AppMessage, MemoryTrending, MovieCatalog, Orchestrator, TrendingStore};

pub use reelscout_types::*;
