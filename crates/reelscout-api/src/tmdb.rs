//! Movie-metadata API client.

use crate::error::{Error, Result};
use reelscout_core::MovieCatalog;
use reelscout_core::config::ApiConfig;
use reelscout_core::query::QueryDescriptor;
use reelscout_types::{Credits, MovieDetails, MoviePagePayload, Video, VideoList};
use reqwest::header::{ACCEPT, HeaderValue};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Bearer-token client for the movie-metadata REST API
#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl TmdbClient {
    /// Build a client for `api.base_url`.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingToken` when no token is given and
    /// `Error::InvalidUrl` when the base URL is not http(s).
    pub fn new(api: &ApiConfig, token: Option<String>) -> Result<Self> {
        let token = token
            .filter(|t| !t.trim().is_empty())
            .ok_or(Error::MissingToken)?;
        let base_url = normalize_base(&api.base_url)?;
        let client = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    /// Absolute URL for a path relative to the API base
    #[must_use]
    pub fn url(&self, path_and_query: &str) -> String {
        format!("{}{path_and_query}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T> {
        let url = self.url(path_and_query);
        debug!("GET {url}");
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::status(status.as_u16(), url));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Search or discover page, as the raw payload
    ///
    /// # Errors
    ///
    /// Transport failures, non-2xx statuses and undecodable bodies.
    pub async fn page(&self, query: &QueryDescriptor) -> Result<MoviePagePayload> {
        self.get_json(&query.path_and_query()).await
    }
}

impl MovieCatalog for TmdbClient {
    async fn discover_or_search(
        &self,
        query: &QueryDescriptor,
    ) -> reelscout_core::Result<MoviePagePayload> {
        Ok(self.page(query).await?)
    }

    async fn movie(&self, id: u64) -> reelscout_core::Result<MovieDetails> {
        Ok(self.get_json(&format!("/movie/{id}")).await?)
    }

    async fn videos(&self, id: u64) -> reelscout_core::Result<Vec<Video>> {
        let list: VideoList = self.get_json(&format!("/movie/{id}/videos")).await?;
        Ok(list.results)
    }

    async fn credits(&self, id: u64) -> reelscout_core::Result<Credits> {
        Ok(self.get_json(&format!("/movie/{id}/credits")).await?)
    }
}

/// Trim trailing slashes and reject anything that is not http(s)
pub(crate) fn normalize_base(url: &str) -> Result<String> {
    let trimmed = url.trim().trim_end_matches('/');
    if !(trimmed.starts_with("https://") || trimmed.starts_with("http://")) {
        return Err(Error::InvalidUrl(url.to_string()));
    }
    Ok(trimmed.to_string())
}
