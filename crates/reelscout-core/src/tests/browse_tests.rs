//! Tests for browse controller transitions

use super::fixtures::{loaded_browse, make_page, only_fetch};
use crate::store::{FetchFailure, GENERIC_FETCH_ERROR};
use crate::window::PageSlot;
use crate::{BrowseController, BrowseOptions, Effect};
use reelscout_types::{FetchStatus, SortDirection, SortField};

#[test]
fn test_request_page_clamps_above_total() {
    let mut browse = loaded_browse(50);
    let effects = browse.request_page(999);
    assert_eq!(browse.current_page(), 50);
    let (_, descriptor) = only_fetch(&effects);
    assert_eq!(descriptor.page(), 50);
    assert!(effects.contains(&Effect::ScrollToResults));
}

#[test]
fn test_request_page_clamps_zero_to_first() {
    let mut browse = loaded_browse(50);
    browse.request_page(7);
    browse.request_page(0);
    assert_eq!(browse.current_page(), 1);
}

#[test]
fn test_page_cap_limits_reachable_pages() {
    let mut browse = loaded_browse(43_000);
    assert_eq!(browse.effective_total_pages(), 500);
    browse.request_last();
    assert_eq!(browse.current_page(), 500);
    assert!(!browse.can_go_next());
    assert!(browse.request_next().is_empty());
}

#[test]
fn test_prev_disabled_on_first_page() {
    let mut browse = loaded_browse(3);
    assert!(!browse.can_go_prev());
    assert!(browse.request_prev().is_empty());
    assert!(browse.can_go_next());
}

#[test]
fn test_prev_and_next_step_by_one() {
    let mut browse = loaded_browse(10);
    browse.request_next();
    browse.request_next();
    assert_eq!(browse.current_page(), 3);
    browse.request_prev();
    assert_eq!(browse.current_page(), 2);
}

#[test]
fn test_sort_change_resets_to_first_page_with_one_fetch() {
    let mut browse = loaded_browse(50);
    let (seq, _) = only_fetch(&browse.request_page(7));
    browse.complete(seq, Ok(make_page(141, 20, 50)));
    assert_eq!(browse.current_page(), 7);

    let effects = browse.set_sort_field(SortField::VoteAverage);
    assert_eq!(browse.current_page(), 1);
    let (_, descriptor) = only_fetch(&effects);
    assert_eq!(
        descriptor.path_and_query(),
        "/discover/movie?sort_by=vote_average.desc&page=1&vote_count.gte=100"
    );
    assert!(!effects.contains(&Effect::ScrollToResults));
}

#[test]
fn test_direction_toggle_resets_page() {
    let mut browse = loaded_browse(50);
    browse.request_page(4);
    let (_, descriptor) = only_fetch(&browse.toggle_sort_direction());
    assert_eq!(browse.search().sort_direction, SortDirection::Asc);
    assert_eq!(descriptor.page(), 1);
    assert!(descriptor.path_and_query().contains("popularity.asc"));
}

#[test]
fn test_old_page_result_not_applied_after_filter_change() {
    let mut browse = loaded_browse(50);
    let (old_seq, _) = only_fetch(&browse.request_page(7));
    let (new_seq, _) = only_fetch(&browse.apply_debounced_query("dune"));

    // Page 7 of the old listing lands after the new query was issued
    assert!(browse.complete(old_seq, Ok(make_page(700, 20, 50))).is_empty());
    assert!(browse.store().is_loading());

    let effects = browse.complete(new_seq, Ok(make_page(1, 3, 1)));
    assert_eq!(browse.store().items()[0].id, 1);
    assert_eq!(browse.current_page(), 1);
    assert!(matches!(effects.as_slice(), [Effect::RecordSearch(hit)] if hit.query == "dune"));
}

#[test]
fn test_stale_response_discarded_when_arriving_late() {
    let mut browse = loaded_browse(10);
    let (a, _) = only_fetch(&browse.request_page(2));
    let (b, _) = only_fetch(&browse.request_page(3));

    browse.complete(b, Ok(make_page(300, 20, 10)));
    browse.complete(a, Ok(make_page(200, 20, 10)));

    assert_eq!(browse.store().items()[0].id, 300);
    assert_eq!(browse.current_page(), 3);
}

#[test]
fn test_search_ignores_sort_inputs() {
    let mut browse = BrowseController::default();
    browse.start();
    browse.set_sort_field(SortField::Revenue);
    let (_, descriptor) = only_fetch(&browse.apply_debounced_query("dune"));
    assert_eq!(descriptor.path_and_query(), "/search/movie?query=dune&page=1");
}

#[test]
fn test_clearing_query_returns_to_discover() {
    let mut browse = BrowseController::default();
    browse.start();
    browse.apply_debounced_query("dune");
    let (_, descriptor) = only_fetch(&browse.apply_debounced_query(""));
    assert!(descriptor.search_text().is_none());
}

#[test]
fn test_failure_hides_pagination() {
    let mut browse = loaded_browse(10);
    assert!(browse.show_pagination());
    let (seq, _) = only_fetch(&browse.request_page(2));
    assert!(!browse.show_pagination());
    browse.complete(seq, Err(FetchFailure::Status(500)));
    assert_eq!(browse.store().status(), FetchStatus::Error);
    assert_eq!(browse.store().error_message(), Some(GENERIC_FETCH_ERROR));
    assert!(!browse.show_pagination());
}

#[test]
fn test_empty_results_hide_pagination() {
    let mut browse = BrowseController::default();
    let (seq, _) = only_fetch(&browse.apply_debounced_query("zzzzqx"));
    browse.complete(seq, Ok(make_page(1, 0, 0)));
    assert!(!browse.show_pagination());
    assert_eq!(browse.effective_total_pages(), 1);
}

#[test]
fn test_shrinking_total_pulls_current_page_back() {
    let mut browse = loaded_browse(10);
    let (seq, _) = only_fetch(&browse.request_page(8));
    let effects = browse.complete(seq, Ok(make_page(1, 0, 5)));
    assert_eq!(browse.current_page(), 5);

    // The clamped page is fetched so the grid matches the page shown
    let (refetch, descriptor) = only_fetch(&effects);
    assert_eq!(descriptor.page(), 5);
    assert!(browse.store().is_loading());
    browse.complete(refetch, Ok(make_page(81, 20, 5)));
    assert_eq!(browse.store().items()[0].id, 81);
    assert!(browse.show_pagination());
}

#[test]
fn test_paging_waits_for_new_query_total() {
    let mut browse = loaded_browse(500);
    let (seq, descriptor) = only_fetch(&browse.apply_debounced_query("dune"));
    assert_eq!(descriptor.path_and_query(), "/search/movie?query=dune&page=1");

    // The 500-page total belongs to the old listing
    assert!(browse.request_next().is_empty());
    assert!(browse.request_last().is_empty());
    assert_eq!(browse.current_page(), 1);

    browse.complete(seq, Ok(make_page(1, 20, 1)));
    assert_eq!(browse.store().items().len(), 20);
    assert!(!browse.can_go_next());
    assert!(browse.request_next().is_empty());
}

#[test]
fn test_paging_resumes_after_failed_reload() {
    let mut browse = loaded_browse(10);
    let (seq, _) = only_fetch(&browse.toggle_sort_direction());
    browse.complete(seq, Err(FetchFailure::Status(502)));
    let (_, descriptor) = only_fetch(&browse.request_page(2));
    assert_eq!(descriptor.page(), 2);
}

#[test]
fn test_windows_follow_current_page() {
    let mut browse = loaded_browse(20);
    browse.request_page(10);
    assert_eq!(browse.fixed_window(), vec![8, 9, 10, 11, 12]);
    assert_eq!(
        browse.compact_window(),
        vec![
            PageSlot::Ellipsis,
            PageSlot::Page(9),
            PageSlot::Page(10),
            PageSlot::Page(11),
            PageSlot::Ellipsis,
        ]
    );
}

#[test]
fn test_custom_window_width() {
    let mut browse = BrowseController::new(BrowseOptions {
        window_width: 3,
        ..Default::default()
    });
    let (seq, _) = only_fetch(&browse.start());
    browse.complete(seq, Ok(make_page(1, 20, 20)));
    browse.request_last();
    assert_eq!(browse.fixed_window(), vec![18, 19, 20]);
}

#[test]
fn test_teardown_discards_in_flight_fetch() {
    let mut browse = loaded_browse(10);
    let (seq, _) = only_fetch(&browse.request_page(2));
    browse.teardown();
    assert!(browse.complete(seq, Ok(make_page(99, 20, 10))).is_empty());
    assert_eq!(browse.store().items()[0].id, 1);
}
