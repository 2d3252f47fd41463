use std::future::Future;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{self, Instant};

/// Keeps consecutive requests to one service at least `interval` apart.
///
/// The interval is measured from the end of one request to the start of the next.
/// The lock is held for the whole request, so throttled calls never overlap.
pub struct RateLimiter {
    interval: Duration,
    next_slot: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(interval: Duration) -> Self {
        RateLimiter {
            interval,
            next_slot: Mutex::new(None),
        }
    }

    pub async fn throttle<F, T>(&self, request: F) -> T
    where
        F: Future<Output = T>,
    {
        let mut next_slot = self.next_slot.lock().await;
        if let Some(slot) = *next_slot {
            time::sleep_until(slot).await;
        }

        let output = request.await;
        *next_slot = Some(Instant::now() + self.interval);
        output
    }
}
