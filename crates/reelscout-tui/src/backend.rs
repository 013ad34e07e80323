//! Trending store selection.

use reelscout_api::AppwriteTrending;
use reelscout_core::config::Config;
use reelscout_core::{MemoryTrending, Movie, TrendingMovie, TrendingStore};
use tracing::{info, warn};

/// Remote search counts when configured, process-local ones otherwise
pub enum TrendingBackend {
    Remote(AppwriteTrending),
    Local(MemoryTrending),
}

impl TrendingBackend {
    /// A misconfigured remote store falls back to the local one
    pub fn from_config(config: &Config) -> Self {
        if !config.trending.is_remote() {
            info!("no trending backend configured, counting searches locally");
            return Self::Local(MemoryTrending::new(config.api.clone()));
        }
        match AppwriteTrending::new(&config.trending, config.api.clone()) {
            Ok(remote) => Self::Remote(remote),
            Err(e) => {
                warn!("trending backend unusable ({e}), counting searches locally");
                Self::Local(MemoryTrending::new(config.api.clone()))
            }
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}

impl TrendingStore for TrendingBackend {
    async fn trending(&self, limit: usize) -> reelscout_core::Result<Vec<TrendingMovie>> {
        match self {
            Self::Remote(store) => store.trending(limit).await,
            Self::Local(store) => store.trending(limit).await,
        }
    }

    async fn record_search(&self, query: &str, top: &Movie) -> reelscout_core::Result<()> {
        match self {
            Self::Remote(store) => store.record_search(query, top).await,
            Self::Local(store) => store.record_search(query, top).await,
        }
    }
}
