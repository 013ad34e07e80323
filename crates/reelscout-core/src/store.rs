//! Result store for the movie grid.
//!
//! Single writer: only [`ResultStore::begin`] and [`ResultStore::complete`]
//! mutate it. Every fetch gets a sequence number; a completion whose number
//! is not the latest issued is discarded without touching the store.

use crate::query::QueryDescriptor;
use reelscout_types::{FetchStatus, Movie, MoviePagePayload};
use tracing::{debug, trace, warn};

/// Shown for transport failures and non-success HTTP statuses
pub const GENERIC_FETCH_ERROR: &str = "Error Fetching Movies. Please try again later.";

/// Shown when an application-level error payload carries no message
pub const FALLBACK_PAYLOAD_ERROR: &str = "Failed to fetch movies";

/// Handle for one issued fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub descriptor: QueryDescriptor,
}

/// Why a fetch produced no payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    /// Connection, DNS, TLS or decode failure
    Transport(String),
    /// Non-2xx HTTP status
    Status(u16),
}

impl std::fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "transport failure: {msg}"),
            Self::Status(code) => write!(f, "HTTP status {code}"),
        }
    }
}

/// Query text and top result of a successful non-empty search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub query: String,
    pub top: Movie,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// The result belonged to a superseded request and was dropped
    Stale,
    Applied { search_hit: Option<SearchHit> },
}

#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    items: Vec<Movie>,
    total_pages: u32,
    status: FetchStatus,
    error_message: Option<String>,
    latest: Option<FetchTicket>,
    next_seq: u64,
}

impl ResultStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            total_pages: 1,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn items(&self) -> &[Movie] {
        &self.items
    }

    #[must_use]
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    #[must_use]
    pub fn status(&self) -> FetchStatus {
        self.status
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    /// Sequence number of the newest issued fetch
    #[must_use]
    pub fn latest_seq(&self) -> Option<u64> {
        self.latest.as_ref().map(|t| t.seq)
    }

    /// Issue a new fetch. Loading state is visible as soon as this returns.
    pub fn begin(&mut self, descriptor: QueryDescriptor) -> FetchTicket {
        self.next_seq += 1;
        let ticket = FetchTicket {
            seq: self.next_seq,
            descriptor,
        };
        self.status = FetchStatus::Loading;
        self.error_message = None;
        self.latest = Some(ticket.clone());
        debug!(
            "fetch #{} issued: {}",
            ticket.seq,
            ticket.descriptor.path_and_query()
        );
        ticket
    }

    /// Apply the outcome of fetch `seq`.
    ///
    /// An error payload short-circuits: items are cleared and nothing from
    /// the payload is written, `total_pages` keeps its previous value.
    pub fn complete(
        &mut self,
        seq: u64,
        outcome: Result<MoviePagePayload, FetchFailure>,
    ) -> Completion {
        let Some(ticket) = self.latest.as_ref().filter(|t| t.seq == seq) else {
            trace!("discarding stale fetch #{seq}");
            return Completion::Stale;
        };
        let query = ticket.descriptor.search_text().map(str::to_string);
        self.latest = None;

        let payload = match outcome {
            Ok(payload) => payload,
            Err(failure) => {
                warn!("fetch #{seq} failed: {failure}");
                self.fail(GENERIC_FETCH_ERROR.to_string());
                return Completion::Applied { search_hit: None };
            }
        };

        if payload.is_failure() {
            let message = payload
                .error
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| FALLBACK_PAYLOAD_ERROR.to_string());
            debug!("fetch #{seq} returned error payload: {message}");
            self.fail(message);
            return Completion::Applied { search_hit: None };
        }

        self.items = payload.results.unwrap_or_default();
        self.total_pages = payload.total_pages.unwrap_or(1).max(1);
        self.status = FetchStatus::Success;
        debug!(
            "fetch #{seq} applied: {} items, {} pages",
            self.items.len(),
            self.total_pages
        );

        let search_hit = query
            .filter(|q| !q.trim().is_empty())
            .zip(self.items.first().cloned())
            .map(|(query, top)| SearchHit { query, top });
        Completion::Applied { search_hit }
    }

    /// Make every outstanding ticket stale (view teardown)
    pub fn invalidate(&mut self) {
        self.latest = None;
        if self.status == FetchStatus::Loading {
            self.status = FetchStatus::Idle;
        }
    }

    fn fail(&mut self, message: String) {
        self.items.clear();
        self.status = FetchStatus::Error;
        self.error_message = Some(message);
    }
}
