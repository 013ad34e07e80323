//! Search-count store on an Appwrite database collection.
//!
//! Each document is `{searchTerm, count, movie_id, poster_url}`. A search
//! bumps the document for its term (creating it on first use) and the
//! trending list is the top documents by `count`.

use crate::error::{Error, Result};
use crate::tmdb::normalize_base;
use reelscout_core::TrendingStore;
use reelscout_core::config::{ApiConfig, TrendingConfig};
use reelscout_types::{Movie, TrendingMovie};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use tracing::debug;

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);
const PROJECT_HEADER: &str = "x-appwrite-project";

#[derive(Debug, Default, Deserialize)]
struct DocumentList {
    #[serde(default)]
    documents: Vec<TrendingMovie>,
}

#[derive(Debug, Serialize)]
struct NewDocument<'a> {
    #[serde(rename = "documentId")]
    document_id: &'a str,
    data: NewSearchCount<'a>,
}

#[derive(Debug, Serialize)]
struct NewSearchCount<'a> {
    #[serde(rename = "searchTerm")]
    search_term: &'a str,
    count: u64,
    movie_id: u64,
    poster_url: String,
}

/// Appwrite REST query in its JSON encoding
fn query(method: &str, attribute: Option<&str>, values: &[serde_json::Value]) -> String {
    let mut q = json!({ "method": method });
    if let Some(attribute) = attribute {
        q["attribute"] = json!(attribute);
    }
    if !values.is_empty() {
        q["values"] = json!(values);
    }
    q.to_string()
}

#[derive(Debug, Clone)]
pub struct AppwriteTrending {
    client: reqwest::Client,
    documents_url: String,
    api: ApiConfig,
}

impl AppwriteTrending {
    /// # Errors
    ///
    /// Returns `Error::InvalidUrl` unless the endpoint and all three ids
    /// are configured, and `Error::Http` if the HTTP client cannot be built.
    pub fn new(trending: &TrendingConfig, api: ApiConfig) -> Result<Self> {
        let (Some(endpoint), Some(project), Some(database), Some(collection)) = (
            trending.endpoint.as_deref(),
            trending.project_id.as_deref(),
            trending.database_id.as_deref(),
            trending.collection_id.as_deref(),
        ) else {
            return Err(Error::InvalidUrl(
                "trending endpoint, projectId, databaseId and collectionId are required".into(),
            ));
        };

        let documents_url = format!(
            "{}/databases/{}/collections/{}/documents",
            normalize_base(endpoint)?,
            urlencoding::encode(database),
            urlencoding::encode(collection),
        );

        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(PROJECT_HEADER),
            HeaderValue::from_str(project).map_err(|_| Error::InvalidUrl(project.to_string()))?,
        );
        let client = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            documents_url,
            api,
        })
    }

    fn list_url(&self, queries: &[String]) -> String {
        let params: Vec<String> = queries
            .iter()
            .map(|q| format!("queries[]={}", urlencoding::encode(q)))
            .collect();
        format!("{}?{}", self.documents_url, params.join("&"))
    }

    fn trending_url(&self, limit: usize) -> String {
        self.list_url(&[
            query("orderDesc", Some("count"), &[]),
            query("limit", None, &[json!(limit)]),
        ])
    }

    fn term_url(&self, term: &str) -> String {
        self.list_url(&[
            query("equal", Some("searchTerm"), &[json!(term)]),
            query("limit", None, &[json!(1)]),
        ])
    }

    async fn list(&self, url: &str) -> Result<Vec<TrendingMovie>> {
        debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::status(status.as_u16(), url));
        }
        let list: DocumentList = serde_json::from_str(&response.text().await?)?;
        Ok(list.documents)
    }

    async fn increment(&self, doc: &TrendingMovie) -> Result<()> {
        let url = format!("{}/{}", self.documents_url, urlencoding::encode(&doc.id));
        debug!("PATCH {url}");
        let response = self
            .client
            .patch(&url)
            .json(&json!({ "data": { "count": doc.count + 1 } }))
            .send()
            .await?;
        check(response.status(), &url)
    }

    async fn create(&self, term: &str, top: &Movie) -> Result<()> {
        let body = NewDocument {
            document_id: "unique()",
            data: NewSearchCount {
                search_term: term,
                count: 1,
                movie_id: top.id,
                poster_url: self
                    .api
                    .poster_url(top.poster_path.as_deref())
                    .unwrap_or_default(),
            },
        };
        debug!("POST {}", self.documents_url);
        let response = self
            .client
            .post(&self.documents_url)
            .json(&body)
            .send()
            .await?;
        check(response.status(), &self.documents_url)
    }
}

fn check(status: reqwest::StatusCode, url: &str) -> Result<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(Error::status(status.as_u16(), url))
    }
}

impl TrendingStore for AppwriteTrending {
    async fn trending(&self, limit: usize) -> reelscout_core::Result<Vec<TrendingMovie>> {
        self.list(&self.trending_url(limit))
            .await
            .map_err(Error::into_trending)
    }

    async fn record_search(&self, query: &str, top: &Movie) -> reelscout_core::Result<()> {
        let existing = self
            .list(&self.term_url(query))
            .await
            .map_err(Error::into_trending)?;
        let written = match existing.first() {
            Some(doc) => self.increment(doc).await,
            None => self.create(query, top).await,
        };
        written.map_err(Error::into_trending)
    }
}
