//! Bring the results container into view after a page change.
//!
//! The container may not be laid out yet when the page changes, so the
//! scroll is retried a bounded number of times with linearly growing
//! delays and then silently abandoned.

use std::time::Duration;
use tracing::{debug, trace};

pub const MAX_SCROLL_RETRIES: u32 = 5;
pub const SCROLL_BACKOFF_STEP: Duration = Duration::from_millis(200);

/// Something that can be scrolled into view once it exists
pub trait ScrollTarget {
    /// Scroll if present. Returns `false` when the target is not there yet.
    fn try_scroll_into_view(&mut self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollStep {
    Scrolled,
    RetryAfter(Duration),
    GaveUp,
}

/// Attempt counter for one scroll request
#[derive(Debug, Clone, Default)]
pub struct ScrollRetry {
    retries: u32,
}

impl ScrollRetry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one attempt. `present` says whether the target scrolled.
    pub fn attempt(&mut self, present: bool) -> ScrollStep {
        if present {
            self.retries = 0;
            return ScrollStep::Scrolled;
        }
        if self.retries >= MAX_SCROLL_RETRIES {
            debug!("results container never appeared, giving up scroll");
            return ScrollStep::GaveUp;
        }
        self.retries += 1;
        let delay = SCROLL_BACKOFF_STEP * self.retries;
        trace!("results container missing, retry {} in {delay:?}", self.retries);
        ScrollStep::RetryAfter(delay)
    }

    #[must_use]
    pub fn retries(&self) -> u32 {
        self.retries
    }
}

/// Drive a [`ScrollRetry`] against `target` on tokio time.
///
/// Returns whether the target was eventually scrolled. Dropping the future
/// cancels any pending retry.
pub async fn scroll_into_view<T: ScrollTarget + ?Sized>(target: &mut T) -> bool {
    let mut retry = ScrollRetry::new();
    loop {
        match retry.attempt(target.try_scroll_into_view()) {
            ScrollStep::Scrolled => return true,
            ScrollStep::GaveUp => return false,
            ScrollStep::RetryAfter(delay) => tokio::time::sleep(delay).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AppearsAfter {
        remaining_misses: u32,
        calls: u32,
    }

    impl ScrollTarget for AppearsAfter {
        fn try_scroll_into_view(&mut self) -> bool {
            self.calls += 1;
            if self.remaining_misses == 0 {
                true
            } else {
                self.remaining_misses -= 1;
                false
            }
        }
    }

    #[test]
    fn test_backoff_grows_linearly_then_gives_up() {
        let mut retry = ScrollRetry::new();
        let steps: Vec<ScrollStep> = (0..6).map(|_| retry.attempt(false)).collect();
        assert_eq!(
            steps,
            vec![
                ScrollStep::RetryAfter(Duration::from_millis(200)),
                ScrollStep::RetryAfter(Duration::from_millis(400)),
                ScrollStep::RetryAfter(Duration::from_millis(600)),
                ScrollStep::RetryAfter(Duration::from_millis(800)),
                ScrollStep::RetryAfter(Duration::from_millis(1000)),
                ScrollStep::GaveUp,
            ]
        );
    }

    #[test]
    fn test_present_target_scrolls_immediately() {
        let mut retry = ScrollRetry::new();
        assert_eq!(retry.attempt(true), ScrollStep::Scrolled);
        assert_eq!(retry.retries(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_driver_waits_for_late_target() {
        let mut target = AppearsAfter {
            remaining_misses: 2,
            calls: 0,
        };
        let start = tokio::time::Instant::now();
        assert!(scroll_into_view(&mut target).await);
        assert_eq!(target.calls, 3);
        assert_eq!(start.elapsed(), Duration::from_millis(600));
    }

    #[tokio::test(start_paused = true)]
    async fn test_driver_gives_up_after_five_retries() {
        let mut target = AppearsAfter {
            remaining_misses: u32::MAX,
            calls: 0,
        };
        assert!(!scroll_into_view(&mut target).await);
        assert_eq!(target.calls, 6);
    }
}
