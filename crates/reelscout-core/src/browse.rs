//! Browse controller: search text, sort selection and the page cursor.
//!
//! Every transition is synchronous and returns the effects the caller has
//! to run (fetches, the scroll-to-results request, search-count updates).
//! The controller itself never awaits anything, so a filter change and the
//! page reset it implies are applied in the same call that issues the fetch.

use crate::config::BrowseConfig;
use crate::query::{self, QueryDescriptor};
use crate::store::{Completion, FetchFailure, FetchTicket, ResultStore, SearchHit};
use crate::window::{self, DEFAULT_PAGE_CAP, DEFAULT_WINDOW_WIDTH, PageSlot};
use reelscout_types::{FetchStatus, MoviePagePayload, SortDirection, SortField};
use tracing::debug;

/// Work the front end must perform after a transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Fetch(FetchTicket),
    ScrollToResults,
    /// Fire-and-forget search-count update
    RecordSearch(SearchHit),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub raw_query: String,
    pub debounced_query: String,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub current_page: u32,
    pub page_cap: u32,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_cap: DEFAULT_PAGE_CAP,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowseOptions {
    pub enable_sorting: bool,
    pub enable_landing: bool,
    pub page_cap: u32,
    pub window_width: u32,
}

impl Default for BrowseOptions {
    fn default() -> Self {
        Self {
            enable_sorting: true,
            enable_landing: true,
            page_cap: DEFAULT_PAGE_CAP,
            window_width: DEFAULT_WINDOW_WIDTH,
        }
    }
}

impl From<&BrowseConfig> for BrowseOptions {
    fn from(config: &BrowseConfig) -> Self {
        Self {
            enable_sorting: config.enable_sorting,
            enable_landing: config.enable_landing,
            page_cap: config.page_cap.max(1),
            window_width: config.window_width.max(1),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BrowseController {
    options: BrowseOptions,
    search: SearchState,
    pagination: PaginationState,
    store: ResultStore,
    /// Set between a filter change and its first applied completion, while
    /// the store still reports the previous filter's page total
    total_pending: bool,
}

impl BrowseController {
    #[must_use]
    pub fn new(options: BrowseOptions) -> Self {
        Self {
            options,
            search: SearchState::default(),
            pagination: PaginationState {
                current_page: 1,
                page_cap: options.page_cap.max(1),
            },
            store: ResultStore::new(),
            total_pending: false,
        }
    }

    /// Initial listing for an empty query
    pub fn start(&mut self) -> Vec<Effect> {
        self.reset_and_fetch()
    }

    /// Record a keystroke. The caller debounces and later calls
    /// [`Self::apply_debounced_query`]; nothing is fetched here.
    pub fn set_raw_query(&mut self, text: impl Into<String>) {
        self.search.raw_query = text.into();
    }

    pub fn apply_debounced_query(&mut self, text: impl Into<String>) -> Vec<Effect> {
        let text = text.into();
        if text == self.search.debounced_query {
            return Vec::new();
        }
        debug!("debounced query changed to {text:?}");
        self.search.debounced_query = text;
        self.reset_and_fetch()
    }

    pub fn set_sort_field(&mut self, field: SortField) -> Vec<Effect> {
        if !self.options.enable_sorting || field == self.search.sort_field {
            return Vec::new();
        }
        debug!("sort field changed to {field}");
        self.search.sort_field = field;
        self.reset_and_fetch()
    }

    pub fn cycle_sort_field(&mut self, forward: bool) -> Vec<Effect> {
        let current = self.search.sort_field;
        let field = if forward { current.next() } else { current.prev() };
        self.set_sort_field(field)
    }

    pub fn toggle_sort_direction(&mut self) -> Vec<Effect> {
        if !self.options.enable_sorting {
            return Vec::new();
        }
        self.search.sort_direction = self.search.sort_direction.toggled();
        debug!("sort direction changed to {}", self.search.sort_direction);
        self.reset_and_fetch()
    }

    /// Move to page `n`, clamped to `[1, effective_total_pages]`.
    ///
    /// A request that lands on the current page after clamping does nothing,
    /// and so does any request made before a new filter's first page is in.
    pub fn request_page(&mut self, n: u32) -> Vec<Effect> {
        if self.total_pending {
            debug!("page {n} ignored until the new listing reports its size");
            return Vec::new();
        }
        let target = n.clamp(1, self.effective_total_pages());
        if target == self.pagination.current_page {
            return Vec::new();
        }
        debug!("page {} -> {target}", self.pagination.current_page);
        self.pagination.current_page = target;
        let ticket = self.store.begin(self.descriptor());
        vec![Effect::Fetch(ticket), Effect::ScrollToResults]
    }

    pub fn request_prev(&mut self) -> Vec<Effect> {
        if !self.can_go_prev() {
            return Vec::new();
        }
        self.request_page(self.pagination.current_page - 1)
    }

    pub fn request_next(&mut self) -> Vec<Effect> {
        if !self.can_go_next() {
            return Vec::new();
        }
        self.request_page(self.pagination.current_page + 1)
    }

    pub fn request_first(&mut self) -> Vec<Effect> {
        self.request_page(1)
    }

    pub fn request_last(&mut self) -> Vec<Effect> {
        self.request_page(self.effective_total_pages())
    }

    /// Feed a fetch outcome back. Stale completions produce no effects.
    ///
    /// If the reported total no longer reaches the current page, the page
    /// is pulled back and fetched again so the items match it.
    pub fn complete(
        &mut self,
        seq: u64,
        outcome: Result<MoviePagePayload, FetchFailure>,
    ) -> Vec<Effect> {
        match self.store.complete(seq, outcome) {
            Completion::Stale => Vec::new(),
            Completion::Applied { search_hit } => {
                self.total_pending = false;
                let mut effects: Vec<Effect> =
                    search_hit.map(Effect::RecordSearch).into_iter().collect();
                let effective = self.effective_total_pages();
                if self.pagination.current_page > effective {
                    debug!(
                        "page {} beyond {effective} reported pages, clamping",
                        self.pagination.current_page
                    );
                    self.pagination.current_page = effective;
                    if self.store.status() == FetchStatus::Success {
                        effects.push(Effect::Fetch(self.store.begin(self.descriptor())));
                    }
                }
                effects
            }
        }
    }

    /// View teardown: outstanding fetches will be discarded on arrival
    pub fn teardown(&mut self) {
        self.store.invalidate();
    }

    #[must_use]
    pub fn options(&self) -> &BrowseOptions {
        &self.options
    }

    #[must_use]
    pub fn search(&self) -> &SearchState {
        &self.search
    }

    #[must_use]
    pub fn pagination(&self) -> PaginationState {
        self.pagination
    }

    #[must_use]
    pub fn store(&self) -> &ResultStore {
        &self.store
    }

    #[must_use]
    pub fn current_page(&self) -> u32 {
        self.pagination.current_page
    }

    #[must_use]
    pub fn effective_total_pages(&self) -> u32 {
        window::effective_total_pages(self.store.total_pages(), self.pagination.page_cap)
    }

    /// Request for the current state
    #[must_use]
    pub fn descriptor(&self) -> QueryDescriptor {
        query::build(
            &self.search.debounced_query,
            self.search.sort_field,
            self.search.sort_direction,
            self.pagination.current_page,
        )
    }

    #[must_use]
    pub fn can_go_prev(&self) -> bool {
        self.pagination.current_page > 1
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.pagination.current_page < self.effective_total_pages()
    }

    /// Pagination is hidden while loading, on error and for empty results
    #[must_use]
    pub fn show_pagination(&self) -> bool {
        self.store.status() != FetchStatus::Loading
            && self.store.error_message().is_none()
            && !self.store.items().is_empty()
    }

    #[must_use]
    pub fn fixed_window(&self) -> Vec<u32> {
        window::fixed_window(
            self.pagination.current_page,
            self.effective_total_pages(),
            self.options.window_width,
        )
    }

    #[must_use]
    pub fn compact_window(&self) -> Vec<PageSlot> {
        window::compact_window(self.pagination.current_page, self.effective_total_pages())
    }

    fn reset_and_fetch(&mut self) -> Vec<Effect> {
        self.pagination.current_page = 1;
        self.total_pending = true;
        let ticket = self.store.begin(self.descriptor());
        vec![Effect::Fetch(ticket)]
    }
}

impl Default for BrowseController {
    fn default() -> Self {
        Self::new(BrowseOptions::default())
    }
}
