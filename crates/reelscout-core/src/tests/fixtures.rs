//! Test fixtures and helpers

use crate::query::QueryDescriptor;
use crate::source::MovieCatalog;
use crate::{BrowseController, Effect, Error, Result};
use reelscout_types::{
    CastMember, Credits, Movie, MovieDetails, MoviePagePayload, Video,
};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Create a minimal `Movie`
pub fn make_movie(id: u64, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        original_language: "en".to_string(),
        ..Default::default()
    }
}

/// Page of `count` movies with ids starting at `first_id`
pub fn make_page(first_id: u64, count: u64, total_pages: u32) -> MoviePagePayload {
    let movies = (first_id..first_id + count)
        .map(|id| make_movie(id, &format!("Movie {id}")))
        .collect();
    MoviePagePayload::page(movies, total_pages)
}

/// Pull the single fetch ticket out of a transition's effects
pub fn only_fetch(effects: &[Effect]) -> (u64, QueryDescriptor) {
    let tickets: Vec<_> = effects
        .iter()
        .filter_map(|e| match e {
            Effect::Fetch(t) => Some((t.seq, t.descriptor.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(tickets.len(), 1, "expected exactly one fetch in {effects:?}");
    tickets[0].clone()
}

/// Controller that has loaded page 1 of a listing with `total_pages` pages
pub fn loaded_browse(total_pages: u32) -> BrowseController {
    let mut browse = BrowseController::default();
    let (seq, _) = only_fetch(&browse.start());
    browse.complete(seq, Ok(make_page(1, 20, total_pages)));
    browse
}

/// Scripted catalog: each request path answers after a delay with either a
/// page payload or an HTTP status.
#[derive(Default)]
pub struct FakeCatalog {
    pages: HashMap<String, (Duration, std::result::Result<MoviePagePayload, u16>)>,
    requests: Mutex<Vec<String>>,
    fail_details: bool,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, path: &str, delay: Duration, payload: MoviePagePayload) -> Self {
        self.pages.insert(path.to_string(), (delay, Ok(payload)));
        self
    }

    pub fn with_status(mut self, path: &str, status: u16) -> Self {
        self.pages
            .insert(path.to_string(), (Duration::ZERO, Err(status)));
        self
    }

    pub fn failing_details(mut self) -> Self {
        self.fail_details = true;
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl MovieCatalog for FakeCatalog {
    async fn discover_or_search(&self, query: &QueryDescriptor) -> Result<MoviePagePayload> {
        let path = query.path_and_query();
        self.requests.lock().unwrap().push(path.clone());
        let Some((delay, answer)) = self.pages.get(&path).cloned() else {
            return Err(Error::Http(404));
        };
        tokio::time::sleep(delay).await;
        answer.map_err(Error::Http)
    }

    async fn movie(&self, id: u64) -> Result<MovieDetails> {
        if self.fail_details {
            return Err(Error::Catalog("connection reset".into()));
        }
        Ok(MovieDetails {
            id,
            title: format!("Movie {id}"),
            runtime: Some(155),
            ..Default::default()
        })
    }

    async fn videos(&self, _id: u64) -> Result<Vec<Video>> {
        Ok(vec![Video {
            key: "n9xhJrPXop4".to_string(),
            name: "Official Trailer".to_string(),
            site: "YouTube".to_string(),
            kind: "Trailer".to_string(),
        }])
    }

    async fn credits(&self, _id: u64) -> Result<Credits> {
        Ok(Credits {
            cast: vec![CastMember {
                id: 1,
                name: "Lead Actor".to_string(),
                character: Some("Hero".to_string()),
                order: Some(0),
            }],
            crew: Vec::new(),
        })
    }
}
