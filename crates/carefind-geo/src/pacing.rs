//! Caller-side pacing for the remote geocoding tier.
//!
//! The resolver itself does not queue or throttle — its contract only says
//! it must not be *invoked* faster than the service budget. Callers that can
//! issue overlapping resolves (the HTTP server) wrap calls in a
//! [`RequestPacer`] to keep the sustained rate at or under one request per
//! second.

use std::time::{Duration, Instant};

use tokio::sync::Mutex;

/// Minimum-interval gate for outbound remote calls.
///
/// `pace()` returns once at least `min_interval` has elapsed since the
/// previous caller was released, sleeping if necessary. Concurrent callers
/// serialize on the internal lock, so bursts drain one per interval.
#[derive(Debug)]
pub struct RequestPacer {
    min_interval: Duration,
    last_release: Mutex<Option<Instant>>,
}

impl RequestPacer {
    #[must_use]
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_release: Mutex::new(None),
        }
    }

    /// Waits until the interval budget allows another remote call.
    pub async fn pace(&self) {
        let mut last = self.last_release.lock().await;
        if let Some(prev) = *last {
            let elapsed = prev.elapsed();
            if elapsed < self.min_interval {
                tokio::time::sleep(self.min_interval - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn first_call_is_not_delayed() {
        let pacer = RequestPacer::new(Duration::from_millis(200));
        let start = Instant::now();
        pacer.pace().await;
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test]
    async fn second_call_waits_out_the_interval() {
        let pacer = RequestPacer::new(Duration::from_millis(50));
        pacer.pace().await;
        let start = Instant::now();
        pacer.pace().await;
        assert!(
            start.elapsed() >= Duration::from_millis(45),
            "second call released after {:?}",
            start.elapsed()
        );
    }

    #[tokio::test]
    async fn spaced_calls_are_not_delayed() {
        let pacer = RequestPacer::new(Duration::from_millis(20));
        pacer.pace().await;
        tokio::time::sleep(Duration::from_millis(30)).await;
        let start = Instant::now();
        pacer.pace().await;
        assert!(start.elapsed() < Duration::from_millis(10));
    }
}
