//! HTTP collaborators for reelscout.
//!
//! - [`TmdbClient`]: the movie-metadata REST API, implementing
//!   [`reelscout_core::MovieCatalog`]
//! - [`AppwriteTrending`]: search counts and the trending list on an
//!   Appwrite collection, implementing [`reelscout_core::TrendingStore`]

pub mod appwrite;
pub mod error;
pub mod tmdb;

pub use appwrite::AppwriteTrending;
pub use error::{Error, Result};
pub use tmdb::TmdbClient;
