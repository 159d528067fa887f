//! A cancellable, single-slot scheduled task used to debounce search input.

use std::time::Duration;

use tokio::time::{sleep_until, Instant};

struct Pending<T> {
    deadline: Instant,
    value: T,
}

/// Holds at most one pending value and releases it after a quiet period.
///
/// Each [`schedule`](Debouncer::schedule) replaces the pending value and
/// restarts the timer, so a burst of calls yields only the last value.
/// [`fire`](Debouncer::fire) is cancel-safe: dropping it before the deadline
/// leaves the pending value in place, which makes it usable as a
/// `tokio::select!` branch.
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replaces any pending value and restarts the quiet period.
    pub fn schedule(&mut self, value: T) {
        self.pending = Some(Pending {
            deadline: Instant::now() + self.delay,
            value,
        });
    }

    /// Drops the pending value, if any, and returns it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Waits for the quiet period to elapse and yields the pending value.
    /// Never resolves while nothing is scheduled.
    pub async fn fire(&mut self) -> T {
        loop {
            let Some(deadline) = self.pending.as_ref().map(|p| p.deadline) else {
                return std::future::pending().await;
            };
            sleep_until(deadline).await;
            if let Some(pending) = self.pending.take() {
                return pending.value;
            }
        }
    }
}
