//! CLI argument parsing for reelscout.

use clap::{Parser, Subcommand};
use reelscout_core::{SortDirection, SortField};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "reelscout")]
#[command(about = "Browse, search and sort movies from the terminal", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (defaults to ~/.config/reelscout/config.json)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (logs to the temp dir as reelscout-tui.log)
    #[arg(short, long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive TUI mode (default)
    Tui,

    /// One-shot title search
    Search {
        query: String,

        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },

    /// One-shot discover listing
    Discover {
        /// popularity, vote_average, revenue, primary_release_date,
        /// original_title or vote_count
        #[arg(short, long, default_value = "popularity")]
        sort: SortField,

        /// asc or desc
        #[arg(long, default_value = "desc")]
        dir: SortDirection,

        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },

    /// Most searched terms
    Trending,

    /// Write the effective config to the config file
    InitConfig,
}

/// `--page` pulled into `[1, page_cap]`, the range the browser can reach
#[must_use]
pub fn clamp_page(page: u32, page_cap: u32) -> u32 {
    page.clamp(1, page_cap.max(1))
}
