//! External collaborators: the movie catalog and the trending store.
//!
//! Implementations live outside this crate (HTTP clients) or in
//! [`memory`] (in-process trending store). Both traits use native async
//! methods with `Send` futures so calls can run on spawned tokio tasks.

mod memory;
mod orchestrator;

pub use memory::MemoryTrending;
pub use orchestrator::{AppMessage, Orchestrator};

use crate::Result;
use crate::query::QueryDescriptor;
use reelscout_types::{Credits, Movie, MovieDetails, MoviePagePayload, TrendingMovie, Video};
use std::future::Future;

/// Default number of trending entries shown
pub const DEFAULT_TRENDING_LIMIT: usize = 5;

/// Movie-metadata service
pub trait MovieCatalog: Send + Sync {
    /// Run a search or discover request.
    ///
    /// Transport failures and non-2xx statuses are errors
    /// ([`crate::Error::Http`] for the latter). An application-level error
    /// payload is *not* an error here; it is returned as a payload.
    fn discover_or_search(
        &self,
        query: &QueryDescriptor,
    ) -> impl Future<Output = Result<MoviePagePayload>> + Send;

    fn movie(&self, id: u64) -> impl Future<Output = Result<MovieDetails>> + Send;

    fn videos(&self, id: u64) -> impl Future<Output = Result<Vec<Video>>> + Send;

    fn credits(&self, id: u64) -> impl Future<Output = Result<Credits>> + Send;
}

/// Search-popularity counter and trending list
pub trait TrendingStore: Send + Sync {
    /// Most searched terms, highest count first
    fn trending(&self, limit: usize) -> impl Future<Output = Result<Vec<TrendingMovie>>> + Send;

    /// Count one search for `query`, remembering `top` as its poster movie
    fn record_search(&self, query: &str, top: &Movie) -> impl Future<Output = Result<()>> + Send;
}
