mod dirs;
mod settings;
mod validation;

pub use dirs::Directories;
pub use settings::{
    ApiConfig, BrowseConfig, Config, GalleryConfig, TOKEN_ENV, TrendingConfig,
};
pub use validation::warn_unknown_fields;
