use super::TrendingStore;
use crate::Result;
use crate::config::ApiConfig;
use reelscout_types::{Movie, TrendingMovie};
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::debug;

/// Process-local trending store, used when no backend is configured.
///
/// Counts live for the lifetime of the process only.
#[derive(Debug, Default)]
pub struct MemoryTrending {
    api: ApiConfig,
    entries: Mutex<HashMap<String, TrendingMovie>>,
}

impl MemoryTrending {
    #[must_use]
    pub fn new(api: ApiConfig) -> Self {
        Self {
            api,
            entries: Mutex::default(),
        }
    }
}

impl TrendingStore for MemoryTrending {
    async fn trending(&self, limit: usize) -> Result<Vec<TrendingMovie>> {
        let entries = self.entries.lock().await;
        let mut ranked: Vec<TrendingMovie> = entries.values().cloned().collect();
        // Ties broken by term so the order is stable
        ranked.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.search_term.cmp(&b.search_term))
        });
        ranked.truncate(limit);
        Ok(ranked)
    }

    async fn record_search(&self, query: &str, top: &Movie) -> Result<()> {
        let mut entries = self.entries.lock().await;
        let entry = entries.entry(query.to_string()).or_insert_with(|| TrendingMovie {
            id: format!("local-{}", top.id),
            search_term: query.to_string(),
            count: 0,
            movie_id: top.id,
            poster_url: self
                .api
                .poster_url(top.poster_path.as_deref())
                .unwrap_or_default(),
            title: Some(top.title.clone()),
        });
        entry.count += 1;
        debug!("search count for {query:?} is now {}", entry.count);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u64, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            poster_path: Some(format!("/{id}.jpg")),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_counts_accumulate_per_term() {
        let store = MemoryTrending::new(ApiConfig::default());
        store.record_search("dune", &movie(1, "Dune")).await.unwrap();
        store.record_search("dune", &movie(2, "Dune II")).await.unwrap();
        store.record_search("alien", &movie(3, "Alien")).await.unwrap();

        let trending = store.trending(5).await.unwrap();
        assert_eq!(trending.len(), 2);
        assert_eq!(trending[0].search_term, "dune");
        assert_eq!(trending[0].count, 2);
        // First recorded movie stays the poster for the term
        assert_eq!(trending[0].movie_id, 1);
        assert_eq!(trending[0].poster_url, "https://image.tmdb.org/t/p/w500/1.jpg");
    }

    #[tokio::test]
    async fn test_trending_respects_limit() {
        let store = MemoryTrending::default();
        for (id, term) in (1..).zip(["a", "b", "c"]) {
            store.record_search(term, &movie(id, term)).await.unwrap();
        }
        assert_eq!(store.trending(2).await.unwrap().len(), 2);
        assert!(store.trending(0).await.unwrap().is_empty());
    }
}
