//! Core rate limiter implementation

use super::types::{RateLimitEntry, RateLimitQuota, RateLimitResult};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tracing::debug;

/// In-memory fixed-window rate limiter, keyed per (endpoint, identifier) pair.
///
/// Single-process only: counters live in process memory and are not shared
/// across replicas. A distributed deployment needs a shared-store counter
/// behind the same call contract.
pub struct RateLimiter {
    /// Rate limit entries by "endpoint:identifier" key
    pub(super) entries: Arc<RwLock<HashMap<String, RateLimitEntry>>>,
}

impl RateLimiter {
    /// Create a new rate limiter
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Atomically check and record a request against the given quota.
    ///
    /// An absent or expired entry starts a fresh window with count 1. An entry
    /// at or over the ceiling rejects the request without consuming quota.
    /// Check and record happen under a single lock acquisition, so concurrent
    /// requests cannot slip past the ceiling.
    pub async fn check_and_record(
        &self,
        endpoint: &str,
        identifier: &str,
        quota: RateLimitQuota,
    ) -> RateLimitResult {
        let now = Instant::now();
        let key = format!("{endpoint}:{identifier}");

        let mut entries = self.entries.write().await;
        if let Some(entry) = entries.get_mut(&key) {
            // Live window: stale entries fall through and get replaced,
            // independent of the background sweep.
            if now < entry.reset_at {
                let reset_after_secs = entry.reset_at.duration_since(now).as_secs();
                if entry.count >= quota.max_requests {
                    debug!(
                        "rate limit exceeded for {}: {}/{} requests",
                        key, entry.count, quota.max_requests
                    );
                    return RateLimitResult {
                        allowed: false,
                        remaining: 0,
                        reset_after_secs,
                        retry_after_secs: Some(reset_after_secs.max(1)),
                    };
                }

                entry.count += 1;
                return RateLimitResult {
                    allowed: true,
                    remaining: quota.max_requests.saturating_sub(entry.count),
                    reset_after_secs,
                    retry_after_secs: None,
                };
            }
        }

        entries.insert(
            key,
            RateLimitEntry {
                count: 1,
                reset_at: now + quota.window,
            },
        );
        RateLimitResult {
            allowed: true,
            remaining: quota.max_requests.saturating_sub(1),
            reset_after_secs: quota.window.as_secs(),
            retry_after_secs: None,
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}
