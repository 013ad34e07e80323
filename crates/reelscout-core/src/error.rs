use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Trending store error: {0}")]
    Trending(String),

    #[error("HTTP status {0}")]
    Http(u16),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for crate::store::FetchFailure {
    fn from(err: Error) -> Self {
        match err {
            Error::Http(code) => Self::Status(code),
            other => Self::Transport(other.to_string()),
        }
    }
}
