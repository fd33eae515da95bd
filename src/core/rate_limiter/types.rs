//! Rate limiter types and per-form quota constants

use std::time::{Duration, Instant};

/// A fixed-window quota: at most `max_requests` per `window`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitQuota {
    /// Maximum requests allowed within one window
    pub max_requests: u32,
    /// Window length
    pub window: Duration,
}

impl RateLimitQuota {
    /// Create a quota from a ceiling and a window length in seconds
    pub const fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window: Duration::from_secs(window_secs),
        }
    }
}

/// Contact form: 5 requests per 15 minutes
pub const CONTACT_QUOTA: RateLimitQuota = RateLimitQuota::new(5, 900);
/// Quote form: 3 requests per 15 minutes
pub const QUOTE_QUOTA: RateLimitQuota = RateLimitQuota::new(3, 900);
/// Emergency form: 10 requests per 15 minutes
pub const EMERGENCY_QUOTA: RateLimitQuota = RateLimitQuota::new(10, 900);
/// Newsletter signup: 5 requests per 15 minutes
pub const NEWSLETTER_QUOTA: RateLimitQuota = RateLimitQuota::new(5, 900);

/// Rate limit check result
#[derive(Debug, Clone)]
pub struct RateLimitResult {
    /// Whether the request is allowed
    pub allowed: bool,
    /// Remaining requests in the current window
    pub remaining: u32,
    /// Time until the window resets (in seconds)
    pub reset_after_secs: u64,
    /// Retry after (in seconds, only set when not allowed)
    pub retry_after_secs: Option<u64>,
}

/// Consumption of one quota window for a single (endpoint, identifier) key
#[derive(Debug, Clone)]
pub(super) struct RateLimitEntry {
    /// Requests counted in the current window
    pub(super) count: u32,
    /// When the current window ends; past this point the entry is stale
    pub(super) reset_at: Instant,
}
