use super::{DEFAULT_TRENDING_LIMIT, MovieCatalog, TrendingStore};
use crate::browse::Effect;
use crate::details::LoadedDetails;
use crate::store::{FetchFailure, FetchTicket, SearchHit};
use reelscout_types::{MoviePagePayload, TrendingMovie};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, trace, warn};

/// Result of a collaborator call, delivered back to the event loop
#[derive(Debug)]
pub enum AppMessage {
    Page {
        seq: u64,
        outcome: Result<MoviePagePayload, FetchFailure>,
    },
    Trending(Vec<TrendingMovie>),
    Details {
        movie_id: u64,
        outcome: Result<LoadedDetails, FetchFailure>,
    },
}

/// Runs collaborator calls on tokio tasks.
///
/// Results come back as [`AppMessage`]s on the receiver returned by
/// [`Orchestrator::new`]; the event loop feeds them to the controllers,
/// which decide whether they are still current. Dropping the orchestrator
/// aborts everything still in flight.
pub struct Orchestrator<C, T> {
    catalog: Arc<C>,
    trending: Arc<T>,
    trending_limit: usize,
    tx: mpsc::UnboundedSender<AppMessage>,
    tasks: Vec<JoinHandle<()>>,
}

impl<C, T> Orchestrator<C, T>
where
    C: MovieCatalog + 'static,
    T: TrendingStore + 'static,
{
    #[must_use]
    pub fn new(catalog: Arc<C>, trending: Arc<T>) -> (Self, mpsc::UnboundedReceiver<AppMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                catalog,
                trending,
                trending_limit: DEFAULT_TRENDING_LIMIT,
                tx,
                tasks: Vec::new(),
            },
            rx,
        )
    }

    #[must_use]
    pub fn with_trending_limit(mut self, limit: usize) -> Self {
        self.trending_limit = limit;
        self
    }

    /// Run the effects of a browse transition.
    ///
    /// Returns `true` if one of them asked for the results to be scrolled
    /// into view; that part is up to the front end.
    pub fn execute(&mut self, effects: impl IntoIterator<Item = Effect>) -> bool {
        let mut scroll = false;
        for effect in effects {
            match effect {
                Effect::Fetch(ticket) => self.fetch_page(ticket),
                Effect::RecordSearch(hit) => self.record_search(hit),
                Effect::ScrollToResults => scroll = true,
            }
        }
        scroll
    }

    pub fn fetch_page(&mut self, ticket: FetchTicket) {
        let catalog = Arc::clone(&self.catalog);
        let tx = self.tx.clone();
        self.spawn(async move {
            let outcome = catalog
                .discover_or_search(&ticket.descriptor)
                .await
                .map_err(FetchFailure::from);
            trace!("fetch #{} finished, ok={}", ticket.seq, outcome.is_ok());
            let _ = tx.send(AppMessage::Page {
                seq: ticket.seq,
                outcome,
            });
        });
    }

    /// Details, videos and credits are requested together; any failure
    /// fails the whole load.
    pub fn load_details(&mut self, movie_id: u64) {
        let catalog = Arc::clone(&self.catalog);
        let tx = self.tx.clone();
        self.spawn(async move {
            let outcome = tokio::try_join!(
                catalog.movie(movie_id),
                catalog.videos(movie_id),
                catalog.credits(movie_id),
            )
            .map(|(details, videos, credits)| LoadedDetails::new(details, &videos, credits))
            .map_err(FetchFailure::from);
            let _ = tx.send(AppMessage::Details { movie_id, outcome });
        });
    }

    /// Failures are logged and leave the gallery as it was
    pub fn load_trending(&mut self) {
        let store = Arc::clone(&self.trending);
        let tx = self.tx.clone();
        let limit = self.trending_limit;
        self.spawn(async move {
            send_trending(store.as_ref(), limit, &tx).await;
        });
    }

    /// Best effort: a failed update is logged and never reaches the store
    /// or the error banner. A successful one refreshes the trending list.
    pub fn record_search(&mut self, hit: SearchHit) {
        let store = Arc::clone(&self.trending);
        let tx = self.tx.clone();
        let limit = self.trending_limit;
        self.spawn(async move {
            match store.record_search(&hit.query, &hit.top).await {
                Ok(()) => {
                    debug!("recorded search {:?} -> movie {}", hit.query, hit.top.id);
                    send_trending(store.as_ref(), limit, &tx).await;
                }
                Err(e) => warn!("failed to update search count for {:?}: {e}", hit.query),
            }
        });
    }

    /// Tasks started and not yet finished
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.tasks.iter().filter(|h| !h.is_finished()).count()
    }

    pub fn abort_all(&mut self) {
        for handle in self.tasks.drain(..) {
            handle.abort();
        }
    }

    fn spawn(&mut self, task: impl Future<Output = ()> + Send + 'static) {
        self.tasks.retain(|h| !h.is_finished());
        self.tasks.push(tokio::spawn(task));
    }
}

impl<C, T> Drop for Orchestrator<C, T> {
    fn drop(&mut self) {
        for handle in self.tasks.drain(..) {
            handle.abort();
        }
    }
}

async fn send_trending<T: TrendingStore>(
    store: &T,
    limit: usize,
    tx: &mpsc::UnboundedSender<AppMessage>,
) {
    match store.trending(limit).await {
        Ok(movies) => {
            debug!("loaded {} trending entries", movies.len());
            let _ = tx.send(AppMessage::Trending(movies));
        }
        Err(e) => warn!("failed to load trending movies: {e}"),
    }
}
