//! Trailing-edge debouncer for the search input.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Collapses rapid pushes into one delayed emission.
///
/// Each `push` supersedes whatever emission is pending. Emissions arrive on
/// the receiver returned by [`Debouncer::new`]. Dropping the debouncer
/// aborts the pending timer, so nothing is delivered after teardown.
///
/// Must be used from within a tokio runtime.
pub struct Debouncer<T> {
    interval: Duration,
    tx: mpsc::UnboundedSender<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    #[must_use]
    pub fn new(interval: Duration) -> (Self, mpsc::UnboundedReceiver<T>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                interval,
                tx,
                pending: None,
            },
            rx,
        )
    }

    pub fn push(&mut self, value: T) {
        self.cancel();
        let tx = self.tx.clone();
        let interval = self.interval;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(interval).await;
            // Receiver gone means the owning view was torn down
            let _ = tx.send(value);
        }));
    }

    /// Drop the pending emission, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
