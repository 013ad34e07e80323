//! Tests for the orchestrator against a scripted catalog

use super::fixtures::{FakeCatalog, make_movie, make_page};
use crate::details::{DetailsState, DetailsView};
use crate::source::{MemoryTrending, Orchestrator, TrendingStore};
use crate::store::{FetchFailure, GENERIC_FETCH_ERROR, SearchHit};
use crate::{AppMessage, BrowseController};
use std::sync::Arc;
use std::time::Duration;

const PAGE_1: &str = "/discover/movie?sort_by=popularity.desc&page=1&vote_count.gte=100";
const PAGE_2: &str = "/discover/movie?sort_by=popularity.desc&page=2&vote_count.gte=100";
const PAGE_3: &str = "/discover/movie?sort_by=popularity.desc&page=3&vote_count.gte=100";

/// Feed every page message to the controller until the channel is idle
async fn drain_pages(
    browse: &mut BrowseController,
    rx: &mut tokio::sync::mpsc::UnboundedReceiver<AppMessage>,
    count: usize,
) {
    for _ in 0..count {
        match rx.recv().await {
            Some(AppMessage::Page { seq, outcome }) => {
                browse.complete(seq, outcome);
            }
            other => panic!("unexpected message {other:?}"),
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_late_response_for_superseded_page_is_dropped() {
    let catalog = FakeCatalog::new()
        .with_page(PAGE_1, Duration::ZERO, make_page(1, 20, 10))
        .with_page(PAGE_2, Duration::from_millis(900), make_page(200, 20, 10))
        .with_page(PAGE_3, Duration::from_millis(100), make_page(300, 20, 10));
    let (mut orchestrator, mut rx) =
        Orchestrator::new(Arc::new(catalog), Arc::new(MemoryTrending::default()));
    let mut browse = BrowseController::default();

    orchestrator.execute(browse.start());
    drain_pages(&mut browse, &mut rx, 1).await;

    orchestrator.execute(browse.request_page(2));
    orchestrator.execute(browse.request_page(3));
    drain_pages(&mut browse, &mut rx, 2).await;

    assert_eq!(browse.current_page(), 3);
    assert_eq!(browse.store().items()[0].id, 300);
}

#[tokio::test(start_paused = true)]
async fn test_page_change_requests_scroll() {
    let catalog = FakeCatalog::new().with_page(PAGE_1, Duration::ZERO, make_page(1, 20, 10));
    let (mut orchestrator, mut rx) =
        Orchestrator::new(Arc::new(catalog), Arc::new(MemoryTrending::default()));
    let mut browse = BrowseController::default();

    assert!(!orchestrator.execute(browse.start()));
    drain_pages(&mut browse, &mut rx, 1).await;
    assert!(orchestrator.execute(browse.request_next()));
}

#[tokio::test(start_paused = true)]
async fn test_http_status_becomes_generic_error() {
    let catalog = FakeCatalog::new().with_status(PAGE_1, 503);
    let (mut orchestrator, mut rx) =
        Orchestrator::new(Arc::new(catalog), Arc::new(MemoryTrending::default()));
    let mut browse = BrowseController::default();

    orchestrator.execute(browse.start());
    drain_pages(&mut browse, &mut rx, 1).await;
    assert_eq!(browse.store().error_message(), Some(GENERIC_FETCH_ERROR));
}

#[tokio::test(start_paused = true)]
async fn test_successful_search_records_count_and_refreshes_trending() {
    let catalog = FakeCatalog::new().with_page(
        "/search/movie?query=dune&page=1",
        Duration::ZERO,
        make_page(438_631, 2, 1),
    );
    let trending = Arc::new(MemoryTrending::default());
    let (mut orchestrator, mut rx) = Orchestrator::new(Arc::new(catalog), Arc::clone(&trending));
    let mut browse = BrowseController::default();

    orchestrator.execute(browse.apply_debounced_query("dune"));
    let Some(AppMessage::Page { seq, outcome }) = rx.recv().await else {
        panic!("expected page");
    };
    orchestrator.execute(browse.complete(seq, outcome));

    let Some(AppMessage::Trending(entries)) = rx.recv().await else {
        panic!("expected trending refresh");
    };
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].search_term, "dune");
    assert_eq!(entries[0].movie_id, 438_631);
    assert_eq!(trending.trending(5).await.unwrap()[0].count, 1);
}

struct BrokenTrending;

impl TrendingStore for BrokenTrending {
    async fn trending(&self, _limit: usize) -> crate::Result<Vec<reelscout_types::TrendingMovie>> {
        Err(crate::Error::Trending("backend unreachable".into()))
    }

    async fn record_search(&self, _query: &str, _top: &reelscout_types::Movie) -> crate::Result<()> {
        Err(crate::Error::Trending("backend unreachable".into()))
    }
}

#[tokio::test(start_paused = true)]
async fn test_trending_failures_are_silent() {
    let (mut orchestrator, mut rx) =
        Orchestrator::new(Arc::new(FakeCatalog::new()), Arc::new(BrokenTrending));
    orchestrator.load_trending();
    orchestrator.record_search(SearchHit {
        query: "dune".to_string(),
        top: make_movie(1, "Dune"),
    });
    tokio::time::sleep(Duration::from_secs(1)).await;
    assert!(rx.try_recv().is_err());
    assert_eq!(orchestrator.in_flight(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_details_load_joins_three_requests() {
    let (mut orchestrator, mut rx) =
        Orchestrator::new(Arc::new(FakeCatalog::new()), Arc::new(MemoryTrending::default()));
    let mut view = DetailsView::new();
    view.open(27_205);
    orchestrator.load_details(27_205);

    let Some(AppMessage::Details { movie_id, outcome }) = rx.recv().await else {
        panic!("expected details");
    };
    assert!(view.complete(movie_id, outcome));
    let Some(DetailsState::Loaded(loaded)) = view.state() else {
        panic!("expected loaded state");
    };
    assert_eq!(loaded.details.runtime_label(), "155 min");
    assert_eq!(loaded.trailer_key.as_deref(), Some("n9xhJrPXop4"));
    assert_eq!(loaded.credits.cast.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_details_failure_is_reported() {
    let catalog = FakeCatalog::new().failing_details();
    let (mut orchestrator, mut rx) =
        Orchestrator::new(Arc::new(catalog), Arc::new(MemoryTrending::default()));
    orchestrator.load_details(1);
    let Some(AppMessage::Details { outcome, .. }) = rx.recv().await else {
        panic!("expected details");
    };
    assert!(matches!(outcome, Err(FetchFailure::Transport(_))));
}

#[tokio::test(start_paused = true)]
async fn test_drop_aborts_in_flight_fetches() {
    let catalog = Arc::new(
        FakeCatalog::new().with_page(PAGE_1, Duration::from_secs(5), make_page(1, 20, 10)),
    );
    let (mut orchestrator, mut rx) =
        Orchestrator::new(Arc::clone(&catalog), Arc::new(MemoryTrending::default()));
    let mut browse = BrowseController::default();

    orchestrator.execute(browse.start());
    tokio::task::yield_now().await;
    assert_eq!(catalog.requests(), vec![PAGE_1.to_string()]);
    assert_eq!(orchestrator.in_flight(), 1);

    drop(orchestrator);
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(rx.recv().await.map(|_| ()), None);
}
