//! Housekeeping for the rate limiter

use super::limiter::RateLimiter;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Interval between background expiry sweeps
const SWEEP_INTERVAL: Duration = Duration::from_secs(300);

impl RateLimiter {
    /// Drop entries whose window has fully elapsed.
    ///
    /// Best-effort housekeeping to bound memory growth; lookups already treat
    /// stale entries as expired regardless of sweep timing.
    pub async fn cleanup(&self) {
        let now = Instant::now();

        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| entry.reset_at > now);
        let removed = before - entries.len();
        if removed > 0 {
            debug!("rate limiter sweep removed {} stale entries", removed);
        }
    }

    /// Start the background sweep task (every 5 minutes)
    pub fn start_cleanup_task(self: Arc<Self>) {
        let limiter = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(SWEEP_INTERVAL);
            loop {
                interval.tick().await;
                limiter.cleanup().await;
            }
        });
    }
}
