//! Process-wide token bucket rate limiter
//!
//! One bucket is shared by every request. It refills continuously at
//! `requests_per_second` up to `capacity` tokens; each request takes one.

use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use crate::config::RateLimitConfig;

/// Outcome of taking a token
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RateLimitDecision {
    Allowed { remaining: u32 },
    /// Bucket empty; a token will be available after `retry_after`
    Limited { retry_after: Duration },
}

impl RateLimitDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed { .. })
    }
}

#[derive(Debug)]
struct Bucket {
    tokens: f64,
    last_refill: Instant,
}

#[derive(Debug)]
pub struct RateLimiter {
    bucket: Mutex<Bucket>,
    capacity: f64,
    refill_per_second: f64,
    enabled: bool,
}

impl RateLimiter {
    /// Creates a full bucket; a zero rate or capacity is raised to one
    pub fn new(requests_per_second: u32, capacity: u32) -> Self {
        let capacity = f64::from(capacity.max(1));

        Self {
            bucket: Mutex::new(Bucket {
                tokens: capacity,
                last_refill: Instant::now(),
            }),
            capacity,
            refill_per_second: f64::from(requests_per_second.max(1)),
            enabled: true,
        }
    }

    pub fn from_config(config: &RateLimitConfig) -> Self {
        let mut limiter = Self::new(config.requests_per_second, config.capacity());
        limiter.enabled = config.enabled;
        limiter
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Takes one token if available
    pub async fn acquire(&self) -> RateLimitDecision {
        if !self.enabled {
            return RateLimitDecision::Allowed { remaining: u32::MAX };
        }

        let mut bucket = self.bucket.lock().await;
        let now = Instant::now();

        let elapsed = now.duration_since(bucket.last_refill).as_secs_f64();
        bucket.tokens = (bucket.tokens + elapsed * self.refill_per_second).min(self.capacity);
        bucket.last_refill = now;

        if bucket.tokens >= 1.0 {
            bucket.tokens -= 1.0;
            RateLimitDecision::Allowed {
                remaining: bucket.tokens.floor() as u32,
            }
        } else {
            let missing = 1.0 - bucket.tokens;
            RateLimitDecision::Limited {
                retry_after: Duration::from_secs_f64(missing / self.refill_per_second),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_burst_then_limited() {
        let limiter = RateLimiter::new(1, 3);

        for expected in [2, 1, 0] {
            assert_eq!(
                limiter.acquire().await,
                RateLimitDecision::Allowed {
                    remaining: expected
                }
            );
        }

        match limiter.acquire().await {
            RateLimitDecision::Limited { retry_after } => {
                assert!(retry_after > Duration::ZERO);
                assert!(retry_after <= Duration::from_secs(1));
            }
            other => panic!("expected limit, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_refills_over_time() {
        let limiter = RateLimiter::new(50, 1);

        assert!(limiter.acquire().await.is_allowed());
        assert!(!limiter.acquire().await.is_allowed());

        tokio::time::sleep(Duration::from_millis(60)).await;

        assert!(limiter.acquire().await.is_allowed());
    }

    #[tokio::test]
    async fn test_disabled_limiter_admits_everything() {
        let limiter = RateLimiter::from_config(&RateLimitConfig {
            enabled: false,
            requests_per_second: 1,
            burst: Some(1),
        });

        for _ in 0..100 {
            assert!(limiter.acquire().await.is_allowed());
        }
        assert!(!limiter.is_enabled());
    }

    #[tokio::test]
    async fn test_from_config() {
        let config = RateLimitConfig {
            enabled: true,
            requests_per_second: 5,
            burst: Some(2),
        };
        let limiter = RateLimiter::from_config(&config);

        assert!(limiter.acquire().await.is_allowed());
        assert!(limiter.acquire().await.is_allowed());
        assert!(!limiter.acquire().await.is_allowed());
    }
}
