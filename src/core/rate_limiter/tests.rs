//! Tests for rate limiter

#[cfg(test)]
mod tests {
    use super::super::limiter::RateLimiter;
    use super::super::types::RateLimitQuota;
    use std::time::Duration;

    #[tokio::test]
    async fn test_allows_within_limit() {
        let limiter = RateLimiter::new();
        let quota = RateLimitQuota::new(10, 900);

        for i in 0..10 {
            let result = limiter.check_and_record("contact", "10.0.0.1", quota).await;
            assert!(result.allowed, "Request {} should be allowed", i);
        }
    }

    #[tokio::test]
    async fn test_remaining_strictly_decreasing() {
        let limiter = RateLimiter::new();
        let quota = RateLimitQuota::new(5, 900);

        let mut previous = quota.max_requests;
        for _ in 0..5 {
            let result = limiter.check_and_record("contact", "10.0.0.1", quota).await;
            assert!(result.allowed);
            assert!(result.remaining < previous);
            previous = result.remaining;
        }
        assert_eq!(previous, 0);
    }

    #[tokio::test]
    async fn test_blocks_over_limit() {
        let limiter = RateLimiter::new();
        let quota = RateLimitQuota::new(3, 900);

        for _ in 0..3 {
            let result = limiter.check_and_record("quote", "10.0.0.1", quota).await;
            assert!(result.allowed);
        }

        let result = limiter.check_and_record("quote", "10.0.0.1", quota).await;
        assert!(!result.allowed);
        assert_eq!(result.remaining, 0);
        assert!(result.retry_after_secs.is_some());
    }

    #[tokio::test]
    async fn test_rejection_does_not_consume_quota() {
        let limiter = RateLimiter::new();
        let quota = RateLimitQuota::new(2, 900);

        limiter.check_and_record("contact", "10.0.0.1", quota).await;
        limiter.check_and_record("contact", "10.0.0.1", quota).await;

        // Repeated rejections keep reporting the same state
        for _ in 0..3 {
            let result = limiter.check_and_record("contact", "10.0.0.1", quota).await;
            assert!(!result.allowed);
            assert_eq!(result.remaining, 0);
        }
    }

    #[tokio::test]
    async fn test_different_identifiers_independent() {
        let limiter = RateLimiter::new();
        let quota = RateLimitQuota::new(2, 900);

        limiter.check_and_record("contact", "10.0.0.1", quota).await;
        limiter.check_and_record("contact", "10.0.0.1", quota).await;

        let result = limiter.check_and_record("contact", "10.0.0.1", quota).await;
        assert!(!result.allowed);

        let result = limiter.check_and_record("contact", "10.0.0.2", quota).await;
        assert!(result.allowed);
    }

    #[tokio::test]
    async fn test_different_endpoints_independent() {
        let limiter = RateLimiter::new();
        let quota = RateLimitQuota::new(1, 900);

        let result = limiter.check_and_record("contact", "10.0.0.1", quota).await;
        assert!(result.allowed);

        let result = limiter.check_and_record("contact", "10.0.0.1", quota).await;
        assert!(!result.allowed);

        // Same identifier, different quota pool
        let result = limiter.check_and_record("quote", "10.0.0.1", quota).await;
        assert!(result.allowed);
    }

    #[tokio::test]
    async fn test_window_restarts_after_expiry() {
        let limiter = RateLimiter::new();
        let quota = RateLimitQuota {
            max_requests: 2,
            window: Duration::from_millis(50),
        };

        limiter.check_and_record("contact", "10.0.0.1", quota).await;
        limiter.check_and_record("contact", "10.0.0.1", quota).await;
        let result = limiter.check_and_record("contact", "10.0.0.1", quota).await;
        assert!(!result.allowed);

        tokio::time::sleep(Duration::from_millis(100)).await;

        // Fresh window, full count again, no carry-over
        let result = limiter.check_and_record("contact", "10.0.0.1", quota).await;
        assert!(result.allowed);
        assert_eq!(result.remaining, 1);
    }

    #[tokio::test]
    async fn test_cleanup_removes_stale_entries() {
        let limiter = RateLimiter::new();
        let quota = RateLimitQuota {
            max_requests: 5,
            window: Duration::from_millis(50),
        };

        limiter.check_and_record("contact", "10.0.0.1", quota).await;
        limiter.check_and_record("quote", "10.0.0.2", quota).await;

        tokio::time::sleep(Duration::from_millis(100)).await;
        limiter.cleanup().await;

        let result = limiter.check_and_record("contact", "10.0.0.1", quota).await;
        assert!(result.allowed);
        assert_eq!(result.remaining, 4);
    }

    #[tokio::test]
    async fn test_cleanup_keeps_live_entries() {
        let limiter = RateLimiter::new();
        let quota = RateLimitQuota::new(2, 900);

        limiter.check_and_record("contact", "10.0.0.1", quota).await;
        limiter.check_and_record("contact", "10.0.0.1", quota).await;
        limiter.cleanup().await;

        // Entry still live, ceiling still enforced
        let result = limiter.check_and_record("contact", "10.0.0.1", quota).await;
        assert!(!result.allowed);
    }
}
