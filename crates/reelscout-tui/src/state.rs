//! View state types for the TUI.

use reelscout_core::scroll::{ScrollRetry, ScrollStep};
use tokio::time::Instant;

/// Current screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Browse,
    Details,
}

/// Which part of the browse screen receives navigation keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Search,
    Gallery,
    Grid,
    Pagination,
}

impl Focus {
    /// Tab order. The gallery is skipped while it has nothing to show.
    #[must_use]
    pub fn next(self, has_gallery: bool) -> Self {
        match self {
            Self::Search if has_gallery => Self::Gallery,
            Self::Search | Self::Gallery => Self::Grid,
            Self::Grid => Self::Pagination,
            Self::Pagination => Self::Search,
        }
    }

    #[must_use]
    pub fn prev(self, has_gallery: bool) -> Self {
        match self {
            Self::Search => Self::Pagination,
            Self::Gallery => Self::Search,
            Self::Grid if has_gallery => Self::Gallery,
            Self::Grid => Self::Search,
            Self::Pagination => Self::Grid,
        }
    }
}

/// Selection in the movie grid
#[derive(Debug, Clone, Copy)]
pub struct GridState {
    pub selected: usize,
    pub columns: usize,
}

impl Default for GridState {
    fn default() -> Self {
        Self {
            selected: 0,
            columns: 1,
        }
    }
}

impl GridState {
    pub fn move_left(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_right(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    /// Returns `false` when already on the top row
    pub fn move_up(&mut self) -> bool {
        if self.selected < self.columns {
            return false;
        }
        self.selected -= self.columns;
        true
    }

    pub fn move_down(&mut self, len: usize) {
        let next = self.selected + self.columns.max(1);
        if next < len {
            self.selected = next;
        }
    }

    /// Keep the selection inside a list that may have shrunk
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn set_columns(&mut self, columns: usize) {
        self.columns = columns.max(1);
    }

    #[must_use]
    pub fn row(&self) -> usize {
        self.selected / self.columns.max(1)
    }
}

/// A scroll-to-results request waiting for its next attempt
#[derive(Debug, Clone)]
pub struct PendingScroll {
    retry: ScrollRetry,
    due: Instant,
}

impl PendingScroll {
    /// First attempt runs on the next loop turn, after a render
    #[must_use]
    pub fn now() -> Self {
        Self {
            retry: ScrollRetry::new(),
            due: Instant::now(),
        }
    }

    #[must_use]
    pub fn due(&self) -> Instant {
        self.due
    }

    /// Record an attempt. Returns `None` once the request is settled.
    #[must_use]
    pub fn after_attempt(mut self, scrolled: bool) -> Option<Self> {
        match self.retry.attempt(scrolled) {
            ScrollStep::Scrolled | ScrollStep::GaveUp => None,
            ScrollStep::RetryAfter(delay) => {
                self.due = Instant::now() + delay;
                Some(self)
            }
        }
    }
}
