//! Outbound request descriptors for the result grid.
//!
//! `build` is pure: identical inputs always render to the same request
//! string, which is what the golden tests below pin down.

use reelscout_types::{SortDirection, SortField};
use serde::{Deserialize, Serialize};

/// Vote-count floor applied to every discover listing
pub const MIN_VOTE_COUNT: u32 = 100;

/// One search/discover request, ready to be issued against the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QueryDescriptor {
    Search {
        query: String,
        page: u32,
    },
    Discover {
        sort_by: String,
        page: u32,
        min_vote_count: u32,
    },
}

impl QueryDescriptor {
    #[must_use]
    pub fn page(&self) -> u32 {
        match self {
            Self::Search { page, .. } | Self::Discover { page, .. } => *page,
        }
    }

    /// Free-text query for search requests
    #[must_use]
    pub fn search_text(&self) -> Option<&str> {
        match self {
            Self::Search { query, .. } => Some(query),
            Self::Discover { .. } => None,
        }
    }

    /// Request path relative to the API base, query string included
    #[must_use]
    pub fn path_and_query(&self) -> String {
        match self {
            Self::Search { query, page } => {
                format!(
                    "/search/movie?query={}&page={page}",
                    urlencoding::encode(query)
                )
            }
            Self::Discover {
                sort_by,
                page,
                min_vote_count,
            } => {
                format!("/discover/movie?sort_by={sort_by}&page={page}&vote_count.gte={min_vote_count}")
            }
        }
    }
}

/// Derive the request for the current browse state.
///
/// Non-empty text always wins over sorting: the search endpoint ignores
/// `sort_by`, so sort inputs do not affect a search descriptor.
#[must_use]
pub fn build(
    query: &str,
    field: SortField,
    direction: SortDirection,
    page: u32,
) -> QueryDescriptor {
    if query.trim().is_empty() {
        QueryDescriptor::Discover {
            sort_by: format!("{}.{}", field.as_str(), direction.as_str()),
            page,
            min_vote_count: MIN_VOTE_COUNT,
        }
    } else {
        QueryDescriptor::Search {
            query: query.to_string(),
            page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_builds_discover() {
        let descriptor = build("", SortField::Popularity, SortDirection::Desc, 1);
        assert_eq!(
            descriptor.path_and_query(),
            "/discover/movie?sort_by=popularity.desc&page=1&vote_count.gte=100"
        );
        assert_eq!(descriptor.search_text(), None);
    }

    #[test]
    fn test_text_query_ignores_sort() {
        let a = build("dune", SortField::Revenue, SortDirection::Asc, 2);
        let b = build("dune", SortField::VoteCount, SortDirection::Desc, 2);
        assert_eq!(a, b);
        assert_eq!(a.path_and_query(), "/search/movie?query=dune&page=2");
    }

    #[test]
    fn test_query_text_is_escaped() {
        let descriptor = build("the thing & co", SortField::Popularity, SortDirection::Desc, 1);
        assert_eq!(
            descriptor.path_and_query(),
            "/search/movie?query=the%20thing%20%26%20co&page=1"
        );
    }

    #[test]
    fn test_whitespace_query_is_discover() {
        let descriptor = build("   ", SortField::OriginalTitle, SortDirection::Asc, 3);
        assert_eq!(
            descriptor.path_and_query(),
            "/discover/movie?sort_by=original_title.asc&page=3&vote_count.gte=100"
        );
    }

    #[test]
    fn test_identical_inputs_render_identically() {
        let first = build("", SortField::PrimaryReleaseDate, SortDirection::Asc, 7);
        let second = build("", SortField::PrimaryReleaseDate, SortDirection::Asc, 7);
        assert_eq!(first.path_and_query(), second.path_and_query());
        assert_eq!(first.page(), 7);
    }
}
