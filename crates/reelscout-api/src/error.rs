//! Error types for the reelscout-api crate.

/// Unified error type for HTTP collaborators
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} answered with status {code}")]
    Status { code: u16, url: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No API token configured (set {} or api.token)", reelscout_core::config::TOKEN_ENV)]
    MissingToken,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl Error {
    #[must_use]
    pub fn status(code: u16, url: impl Into<String>) -> Self {
        Self::Status {
            code,
            url: url.into(),
        }
    }

    /// Same mapping as the `From` impl, but failures land in the trending
    /// domain instead of the catalog one.
    #[must_use]
    pub fn into_trending(self) -> reelscout_core::Error {
        match self {
            Self::Status { code, .. } => reelscout_core::Error::Http(code),
            other => reelscout_core::Error::Trending(other.to_string()),
        }
    }
}

impl From<Error> for reelscout_core::Error {
    fn from(e: Error) -> Self {
        match e {
            Error::Status { code, .. } => Self::Http(code),
            Error::MissingToken | Error::InvalidUrl(_) => Self::Config(e.to_string()),
            other => Self::Catalog(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
