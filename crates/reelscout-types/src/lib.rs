//! Shared types for reelscout components.
//!
//! This crate provides the data model used across reelscout-core,
//! reelscout-api and reelscout-tui. Types that mirror the movie-metadata
//! API keep its snake_case field names so payloads deserialize directly.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Deserialize a Vec that may be null or missing (both become empty vec)
fn deserialize_null_as_empty_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let opt: Option<Vec<T>> = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// Deserialize a field that may be null or missing as its default value
fn deserialize_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Server-side field a discover listing is ordered by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    Popularity,
    VoteAverage,
    Revenue,
    PrimaryReleaseDate,
    OriginalTitle,
    VoteCount,
}

impl SortField {
    /// Selector order, matching the options shown to the user.
    pub const ALL: [SortField; 6] = [
        SortField::Popularity,
        SortField::VoteAverage,
        SortField::Revenue,
        SortField::PrimaryReleaseDate,
        SortField::OriginalTitle,
        SortField::VoteCount,
    ];

    /// Wire token used in `sort_by=<field>.<direction>`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Popularity => "popularity",
            Self::VoteAverage => "vote_average",
            Self::Revenue => "revenue",
            Self::PrimaryReleaseDate => "primary_release_date",
            Self::OriginalTitle => "original_title",
            Self::VoteCount => "vote_count",
        }
    }

    /// Human-readable label for the sort selector
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Popularity => "Popularity",
            Self::VoteAverage => "Rating",
            Self::Revenue => "Box Office",
            Self::PrimaryReleaseDate => "Release Date",
            Self::OriginalTitle => "Title",
            Self::VoteCount => "Vote Count",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Next option in selector order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Previous option in selector order, wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a sort token is not one of the known values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSortToken(pub String);

impl fmt::Display for UnknownSortToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sort token: {}", self.0)
    }
}

impl std::error::Error for UnknownSortToken {}

impl FromStr for SortField {
    type Err = UnknownSortToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownSortToken(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Asc => "Ascending",
            Self::Desc => "Descending",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = UnknownSortToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(UnknownSortToken(other.to_string())),
        }
    }
}

/// A movie as listed by search/discover results.
///
/// Everything except `id` and `title` may be missing in real payloads; the
/// display helpers substitute placeholders rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub original_language: String,
    #[serde(default)]
    pub overview: Option<String>,
}

impl Movie {
    /// Rating with one decimal, or `N/A` when absent or zero
    #[must_use]
    pub fn rating_label(&self) -> String {
        match self.vote_average {
            Some(v) if v.abs() > f64::EPSILON => format!("{v:.1}"),
            _ => "N/A".to_string(),
        }
    }

    /// Four-digit year of the release date, or `N/A`
    #[must_use]
    pub fn release_year(&self) -> &str {
        release_year(self.release_date.as_deref())
    }

    #[must_use]
    pub fn language_label(&self) -> String {
        self.original_language.to_uppercase()
    }
}

fn release_year(date: Option<&str>) -> &str {
    match date.and_then(|d| d.split('-').next()) {
        Some(year) if !year.is_empty() => year,
        _ => "N/A",
    }
}

/// Raw body of a search/discover response.
///
/// Successful responses carry `results` and `total_pages`. The
/// application-level failure shape is `{"Response": "False", "Error": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoviePagePayload {
    #[serde(default)]
    pub results: Option<Vec<Movie>>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default, rename = "Response", skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default, rename = "Error", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MoviePagePayload {
    /// Build a successful page (used by in-process sources and tests)
    #[must_use]
    pub fn page(results: Vec<Movie>, total_pages: u32) -> Self {
        Self {
            results: Some(results),
            total_pages: Some(total_pages),
            ..Default::default()
        }
    }

    /// True when the payload signals an application-level failure
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.response.as_deref() == Some("False")
    }
}

/// Lifecycle of the last list fetch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// One search-count document from the trending backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendingMovie {
    #[serde(rename = "$id", default, deserialize_with = "deserialize_null_as_default")]
    pub id: String,
    #[serde(rename = "searchTerm", default, deserialize_with = "deserialize_null_as_default")]
    pub search_term: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub movie_id: u64,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub poster_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl TrendingMovie {
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.search_term)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// Full record from `GET /movie/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    pub id: u64,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub title: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub vote_average: f64,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_null_as_empty_vec")]
    pub genres: Vec<Genre>,
}

impl MovieDetails {
    #[must_use]
    pub fn release_year(&self) -> &str {
        release_year(self.release_date.as_deref())
    }

    #[must_use]
    pub fn runtime_label(&self) -> String {
        self.runtime
            .filter(|m| *m > 0)
            .map_or_else(|| "N/A".to_string(), |m| format!("{m} min"))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub key: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub site: String,
    #[serde(rename = "type", default, deserialize_with = "deserialize_null_as_default")]
    pub kind: String,
}

/// Body of `GET /movie/{id}/videos`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoList {
    #[serde(default, deserialize_with = "deserialize_null_as_empty_vec")]
    pub results: Vec<Video>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    pub id: u64,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub name: String,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub order: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
    pub id: u64,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub job: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub department: String,
}

/// Body of `GET /movie/{id}/credits`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credits {
    #[serde(default, deserialize_with = "deserialize_null_as_empty_vec")]
    pub cast: Vec<CastMember>,
    #[serde(default, deserialize_with = "deserialize_null_as_empty_vec")]
    pub crew: Vec<CrewMember>,
}

impl Credits {
    /// Crew members credited with the `Director` job
    pub fn directors(&self) -> impl Iterator<Item = &CrewMember> {
        self.crew.iter().filter(|c| c.job == "Director")
    }
}
