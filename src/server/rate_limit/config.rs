//! Admission policies for rate limited endpoints.

use std::time::Duration;

/// Sliding window admission policy: at most `max_requests` per key within `window`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimitPolicy {
    pub window: Duration,
    pub max_requests: usize,
}

impl RateLimitPolicy {
    pub const fn new(window: Duration, max_requests: usize) -> Self {
        Self {
            window,
            max_requests,
        }
    }
}

/// Node reads keyed by address or txid (10 requests per 5 seconds)
pub const NODE_READ: RateLimitPolicy = RateLimitPolicy::new(Duration::from_secs(5), 10);

/// Mint document generation keyed by collection (20 requests per 10 seconds)
pub const MINT_DOCUMENT: RateLimitPolicy = RateLimitPolicy::new(Duration::from_secs(10), 20);

/// On-chain mints keyed by sending address (6 requests per minute)
pub const MINT_TRANSACTION: RateLimitPolicy = RateLimitPolicy::new(Duration::from_secs(60), 6);

/// Cron expression for removing idle keys, every minute at second 0
pub const SWEEP_CRON_EXPRESSION: &str = "0 * * * * *";
