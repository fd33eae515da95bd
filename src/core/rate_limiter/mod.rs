//! Per-endpoint request quota guard
//!
//! Fixed-window rate limiting keyed by (endpoint, client identifier), entirely
//! in process memory, with a periodic expiry sweep.

mod limiter;
mod types;
mod utils;

#[cfg(test)]
mod tests;

pub use limiter::RateLimiter;
pub use types::{
    CONTACT_QUOTA, EMERGENCY_QUOTA, NEWSLETTER_QUOTA, QUOTE_QUOTA, RateLimitQuota, RateLimitResult,
};
