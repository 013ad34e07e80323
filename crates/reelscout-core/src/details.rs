//! Detail view state for a single movie.

use crate::store::FetchFailure;
use reelscout_types::{Credits, MovieDetails, Video};
use tracing::{debug, trace, warn};

/// Shown when any of the detail requests fails
pub const DETAILS_ERROR: &str = "Failed to load movie details.";

const TRAILER_KIND: &str = "Trailer";
const TRAILER_SITE: &str = "YouTube";

/// First YouTube trailer in the list, if any
#[must_use]
pub fn pick_trailer(videos: &[Video]) -> Option<&Video> {
    videos
        .iter()
        .find(|v| v.kind == TRAILER_KIND && v.site == TRAILER_SITE)
}

/// Watch link for a YouTube video key
#[must_use]
pub fn youtube_url(key: &str) -> String {
    format!("https://www.youtube.com/watch?v={key}")
}

/// Everything the detail view renders once loaded
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDetails {
    pub details: MovieDetails,
    pub trailer_key: Option<String>,
    pub credits: Credits,
}

impl LoadedDetails {
    #[must_use]
    pub fn new(details: MovieDetails, videos: &[Video], credits: Credits) -> Self {
        Self {
            details,
            trailer_key: pick_trailer(videos).map(|v| v.key.clone()),
            credits,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailsState {
    Loading,
    Loaded(Box<LoadedDetails>),
    Error(String),
}

/// Detail view for the movie the user currently has open.
///
/// Loads are keyed by movie id; a result for any other id (the user went
/// back, or opened a different movie) is dropped.
#[derive(Debug, Clone, Default)]
pub struct DetailsView {
    open: Option<(u64, DetailsState)>,
}

impl DetailsView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `movie_id` in the loading state. The caller issues the load.
    pub fn open(&mut self, movie_id: u64) {
        debug!("opening details for movie {movie_id}");
        self.open = Some((movie_id, DetailsState::Loading));
    }

    /// Back to the grid
    pub fn close(&mut self) {
        self.open = None;
    }

    #[must_use]
    pub fn movie_id(&self) -> Option<u64> {
        self.open.as_ref().map(|(id, _)| *id)
    }

    #[must_use]
    pub fn state(&self) -> Option<&DetailsState> {
        self.open.as_ref().map(|(_, state)| state)
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Apply a load result. Returns `false` when it was for another movie.
    pub fn complete(
        &mut self,
        movie_id: u64,
        outcome: Result<LoadedDetails, FetchFailure>,
    ) -> bool {
        let Some((open_id, state)) = self.open.as_mut() else {
            trace!("details for movie {movie_id} arrived after close");
            return false;
        };
        if *open_id != movie_id {
            trace!("discarding details for movie {movie_id}, showing {open_id}");
            return false;
        }
        *state = match outcome {
            Ok(loaded) => DetailsState::Loaded(Box::new(loaded)),
            Err(failure) => {
                warn!("details for movie {movie_id} failed: {failure}");
                DetailsState::Error(DETAILS_ERROR.to_string())
            }
        };
        true
    }
}
