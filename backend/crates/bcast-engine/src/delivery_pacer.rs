use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};

/// Spaces delivery attempts at least `min_interval` apart.
///
/// The first attempt goes out immediately; no bursts after that.
pub struct DeliveryPacer {
    limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    min_interval: Duration,
    last_release: Mutex<Option<Instant>>,
}

impl DeliveryPacer {
    /// Returns None for a zero interval: nothing to pace.
    pub fn new(min_interval: Duration) -> Option<Self> {
        let quota = Quota::with_period(min_interval)?;

        Some(Self {
            limiter: RateLimiter::direct(quota),
            min_interval,
            last_release: Mutex::new(None),
        })
    }

    /// Wait until the next attempt is allowed.
    pub async fn until_ready(&self) {
        self.limiter.until_ready().await;

        // The limiter's clock may run ahead of Instant by a few microseconds
        let remaining = self
            .last_release()
            .map(|last| self.min_interval.saturating_sub(last.elapsed()))
            .unwrap_or_default();
        if !remaining.is_zero() {
            tokio::time::sleep(remaining).await;
        }

        *self
            .last_release
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(Instant::now());
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    fn last_release(&self) -> Option<Instant> {
        *self
            .last_release
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
