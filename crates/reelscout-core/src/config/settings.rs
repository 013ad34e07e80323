use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable that overrides `api.token`
pub const TOKEN_ENV: &str = "TMDB_API_KEY";

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub trending: TrendingConfig,

    #[serde(default)]
    pub browse: BrowseConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,
}

impl Config {
    /// Load config from file.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid JSON,
    /// or holds out-of-range values.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        super::validation::warn_unknown_fields(&content, "config.json");
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.browse.page_cap == 0 {
            return Err(Error::Config("browse.pageCap must be at least 1".into()));
        }
        if self.browse.window_width == 0 {
            return Err(Error::Config("browse.windowWidth must be at least 1".into()));
        }
        for (name, value) in [
            ("gallery.wideFraction", self.gallery.wide_fraction),
            ("gallery.narrowFraction", self.gallery.narrow_fraction),
        ] {
            if value.is_nan() || value <= 0.0 || value > 1.0 {
                return Err(Error::Config(format!("{name} must be in (0, 1], got {value}")));
            }
        }
        if self.gallery.swipe_threshold < 0.0 {
            return Err(Error::Config("gallery.swipeThreshold must not be negative".into()));
        }
        Ok(())
    }

    /// Bearer token, preferring the environment over the file
    #[must_use]
    pub fn api_token(&self) -> Option<String> {
        std::env::var(TOKEN_ENV)
            .ok()
            .filter(|t| !t.trim().is_empty())
            .or_else(|| self.api.token.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

fn default_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}
fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            image_base_url: default_image_base_url(),
            token: None,
        }
    }
}

impl ApiConfig {
    /// Poster URL for a movie, `None` when the movie has no poster
    #[must_use]
    pub fn poster_url(&self, poster_path: Option<&str>) -> Option<String> {
        let path = poster_path.filter(|p| !p.is_empty())?;
        let base = self.image_base_url.trim_end_matches('/');
        Some(format!("{base}/{}", path.trim_start_matches('/')))
    }
}

/// Backend-as-a-service collection holding search counts.
///
/// All four identifiers must be set for the remote store to be used.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,

    #[serde(default = "default_trending_limit")]
    pub limit: usize,
}

fn default_trending_limit() -> usize {
    5
}

impl Default for TrendingConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            project_id: None,
            database_id: None,
            collection_id: None,
            limit: default_trending_limit(),
        }
    }
}

impl TrendingConfig {
    #[must_use]
    pub fn is_remote(&self) -> bool {
        self.endpoint.is_some()
            && self.project_id.is_some()
            && self.database_id.is_some()
            && self.collection_id.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseConfig {
    #[serde(default = "default_debounce")]
    pub debounce_ms: u64,

    #[serde(default = "default_page_cap")]
    pub page_cap: u32,

    #[serde(default = "default_window_width")]
    pub window_width: u32,

    /// Terminal width (columns) below which compact layouts are used
    #[serde(default = "default_compact_breakpoint")]
    pub compact_breakpoint: u16,

    #[serde(default = "default_true")]
    pub enable_sorting: bool,

    #[serde(default = "default_true")]
    pub enable_landing: bool,
}

fn default_debounce() -> u64 {
    500
}
fn default_page_cap() -> u32 {
    500
}
fn default_window_width() -> u32 {
    5
}
fn default_compact_breakpoint() -> u16 {
    100
}
fn default_true() -> bool {
    true
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce(),
            page_cap: default_page_cap(),
            window_width: default_window_width(),
            compact_breakpoint: default_compact_breakpoint(),
            enable_sorting: true,
            enable_landing: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryConfig {
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: f32,

    #[serde(default = "default_wide_fraction")]
    pub wide_fraction: f32,

    #[serde(default = "default_narrow_fraction")]
    pub narrow_fraction: f32,
}

fn default_swipe_threshold() -> f32 {
    50.0
}
fn default_wide_fraction() -> f32 {
    0.5
}
fn default_narrow_fraction() -> f32 {
    0.75
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: default_swipe_threshold(),
            wide_fraction: default_wide_fraction(),
            narrow_fraction: default_narrow_fraction(),
        }
    }
}
