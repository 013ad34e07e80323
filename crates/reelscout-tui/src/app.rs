//! Application state and message handling for the TUI.

use crate::state::{Focus, GridState, PendingScroll, ViewMode};
use crate::widgets::PageBar;
use ratatui::layout::Rect;
use reelscout_core::config::{ApiConfig, Config};
use reelscout_core::details::DetailsView;
use reelscout_core::gallery::{Direction, GalleryScroller, GallerySettings};
use reelscout_core::scroll::ScrollTarget;
use reelscout_core::{AppMessage, BrowseController, BrowseOptions, Effect, Movie, TrendingMovie};
use std::process::{Command, Stdio};
use tracing::debug;

/// Columns taken by one trending card, separator included
pub const GALLERY_CARD_WIDTH: u16 = 24;

/// Spawn a command with all I/O redirected to null (fire and forget)
pub fn spawn_silent(program: &str, args: &[&str]) {
    let _ = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();
}

/// Main application state
#[allow(clippy::struct_excessive_bools)] // UI state flags are independent boolean conditions
pub struct App {
    pub browse: BrowseController,
    pub gallery: GalleryScroller,
    pub details: DetailsView,
    pub trending: Vec<TrendingMovie>,
    pub trending_selected: usize,
    pub api: ApiConfig,
    pub input: String,
    /// Cursor position in chars, not bytes
    pub cursor_position: usize,
    pub view_mode: ViewMode,
    pub focus: Focus,
    pub grid: GridState,
    pub details_scroll: u16,
    pub compact_breakpoint: u16,
    /// Set on each render from the terminal width
    pub compact: bool,
    /// Landing banner and gallery collapsed so the grid fills the screen
    pub results_in_view: bool,
    pub should_quit: bool,
    pub pending_scroll: Option<PendingScroll>,
    /// Where the grid was drawn last frame, `None` while it is not on screen
    pub results_area: Option<Rect>,
    pub gallery_area: Option<Rect>,
    pub page_bar: Option<(Rect, PageBar)>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            browse: BrowseController::new(BrowseOptions::from(&config.browse)),
            gallery: GalleryScroller::new(GallerySettings::from(&config.gallery)),
            details: DetailsView::new(),
            trending: Vec::new(),
            trending_selected: 0,
            api: config.api.clone(),
            input: String::new(),
            cursor_position: 0,
            view_mode: ViewMode::default(),
            focus: Focus::default(),
            grid: GridState::default(),
            details_scroll: 0,
            compact_breakpoint: config.browse.compact_breakpoint,
            compact: false,
            results_in_view: false,
            should_quit: false,
            pending_scroll: None,
            results_area: None,
            gallery_area: None,
            page_bar: None,
        }
    }

    fn byte_index(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor_position)
            .map_or(self.input.len(), |(i, _)| i)
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor_position = (self.cursor_position + 1).min(self.input.chars().count());
    }

    pub fn enter_char(&mut self, c: char) {
        let index = self.byte_index();
        self.input.insert(index, c);
        self.move_cursor_right();
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        self.move_cursor_left();
        let index = self.byte_index();
        self.input.remove(index);
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.cursor_position = 0;
    }

    #[must_use]
    pub fn movies(&self) -> &[Movie] {
        self.browse.store().items()
    }

    #[must_use]
    pub fn selected_movie(&self) -> Option<&Movie> {
        self.movies().get(self.grid.selected)
    }

    /// Whether the landing banner is drawn this frame
    #[must_use]
    pub fn landing_visible(&self) -> bool {
        self.browse.options().enable_landing && !self.results_in_view
    }

    #[must_use]
    pub fn gallery_visible(&self) -> bool {
        !self.trending.is_empty() && !self.results_in_view
    }

    /// Feed a collaborator result into the matching state machine.
    ///
    /// Returns the follow-up effects (search-count updates) to execute.
    pub fn handle_message(&mut self, message: AppMessage) -> Vec<Effect> {
        match message {
            AppMessage::Page { seq, outcome } => {
                let effects = self.browse.complete(seq, outcome);
                self.grid.clamp(self.movies().len());
                effects
            }
            AppMessage::Trending(movies) => {
                debug!("trending list now has {} entries", movies.len());
                self.trending = movies;
                self.trending_selected = self
                    .trending_selected
                    .min(self.trending.len().saturating_sub(1));
                if self.trending.is_empty() && self.focus == Focus::Gallery {
                    self.focus = Focus::Search;
                }
                Vec::new()
            }
            AppMessage::Details { movie_id, outcome } => {
                self.details.complete(movie_id, outcome);
                Vec::new()
            }
        }
    }

    /// A transition asked for the results to be brought into view.
    ///
    /// The grid is replaced by a loading line until the new page lands, so
    /// the first attempts usually miss and back off.
    pub fn request_scroll(&mut self) {
        self.results_area = None;
        self.pending_scroll = Some(PendingScroll::now());
    }

    /// Run the pending scroll attempt, if one is due
    pub fn poll_scroll(&mut self) {
        if let Some(pending) = self.pending_scroll.take() {
            let scrolled = self.try_scroll_into_view();
            self.pending_scroll = pending.after_attempt(scrolled);
        }
    }

    /// Switch to the detail view. Returns the id to load.
    pub fn open_details(&mut self, movie_id: u64) -> u64 {
        self.details.open(movie_id);
        self.details_scroll = 0;
        self.view_mode = ViewMode::Details;
        movie_id
    }

    pub fn open_selected(&mut self) -> Option<u64> {
        let id = self.selected_movie()?.id;
        Some(self.open_details(id))
    }

    pub fn open_trending(&mut self) -> Option<u64> {
        let id = self.trending.get(self.trending_selected)?.movie_id;
        Some(self.open_details(id))
    }

    pub fn close_details(&mut self) {
        self.details.close();
        self.view_mode = ViewMode::Browse;
    }

    /// Move the trending selection, scrolling the strip when the card
    /// would leave the visible part
    pub fn select_trending(&mut self, direction: Direction) {
        let last = self.trending.len().saturating_sub(1);
        self.trending_selected = match direction {
            Direction::Left => self.trending_selected.saturating_sub(1),
            Direction::Right => (self.trending_selected + 1).min(last),
        };

        let Some(area) = self.gallery_area else {
            return;
        };
        let card = f32::from(GALLERY_CARD_WIDTH);
        #[allow(clippy::cast_precision_loss)]
        let start = self.trending_selected as f32 * card;
        let offset = self.gallery.offset();
        let visible = f32::from(area.width);
        if start < offset {
            self.gallery.scroll(Direction::Left);
        } else if start + card > offset + visible {
            self.gallery.scroll(Direction::Right);
        }
    }

    /// Show the landing banner and gallery again
    pub fn scroll_to_top(&mut self) {
        self.results_in_view = false;
    }
}

impl ScrollTarget for App {
    fn try_scroll_into_view(&mut self) -> bool {
        if self.results_area.is_none() {
            return false;
        }
        self.results_in_view = true;
        self.focus = Focus::Grid;
        self.grid.selected = 0;
        true
    }
}
