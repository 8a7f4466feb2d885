//! Sliding-window rate limiter shared by all request handlers.
//!
//! Every key (endpoint, ticker, identifier) owns an ordered list of admission timestamps.
//! Keys are stored in a sharded [`DashMap`] so handlers limiting different keys never
//! contend on a single lock, while requests for the same key are serialised by the shard
//! lock for the duration of one check.
//!
//! Keys whose timestamps have all expired are removed by [`RateLimiter::sweep`], which the
//! cron scheduler runs every minute.

pub mod config;

use std::{
    collections::VecDeque,
    sync::Arc,
    time::{Duration, Instant},
};

use dashmap::DashMap;
use dioxus_logger::tracing;

use crate::server::{error::rate_limit::RateLimitError, rate_limit::config::RateLimitPolicy};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RateLimitKey {
    pub endpoint: String,
    pub ticker: String,
    pub identifier: String,
}

impl RateLimitKey {
    pub fn new(
        endpoint: impl Into<String>,
        ticker: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            ticker: ticker.into(),
            identifier: identifier.into(),
        }
    }
}

struct Window {
    /// Length of the window most recently applied to this key, used by the sweep
    length: Duration,
    admitted: VecDeque<Instant>,
}

impl Window {
    fn evict(&mut self, now: Instant) {
        let length = self.length;
        self.admitted
            .retain(|t| now.saturating_duration_since(*t) < length);
    }
}

#[derive(Clone, Default)]
pub struct RateLimiter {
    windows: Arc<DashMap<RateLimitKey, Window>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit or reject a request for `key` at the current instant.
    pub fn allow(&self, key: &RateLimitKey, policy: RateLimitPolicy) -> bool {
        self.allow_at(key, Instant::now(), policy)
    }

    /// Admit or reject a request for `key` as if it arrived at `now`.
    ///
    /// Timestamps older than the policy window are dropped first. A rejected request is not
    /// recorded, so a client hammering a limited key does not extend its own lockout.
    pub fn allow_at(&self, key: &RateLimitKey, now: Instant, policy: RateLimitPolicy) -> bool {
        let mut window = self.windows.entry(key.clone()).or_insert_with(|| Window {
            length: policy.window,
            admitted: VecDeque::new(),
        });

        window.length = policy.window;
        window.evict(now);

        if window.admitted.len() >= policy.max_requests {
            return false;
        }

        window.admitted.push_back(now);
        true
    }

    /// Like [`Self::allow`] but returns [`RateLimitError::Exceeded`] and logs the rejection.
    pub fn check(&self, key: &RateLimitKey, policy: RateLimitPolicy) -> Result<(), RateLimitError> {
        if self.allow(key, policy) {
            return Ok(());
        }

        tracing::warn!(
            endpoint = %key.endpoint,
            ticker = %key.ticker,
            identifier = %key.identifier,
            "Rate limit exceeded"
        );

        Err(RateLimitError::Exceeded)
    }

    /// Remove keys without any timestamp inside their window.
    ///
    /// # Returns
    /// Number of keys removed
    pub fn sweep(&self) -> usize {
        self.sweep_at(Instant::now())
    }

    pub fn sweep_at(&self, now: Instant) -> usize {
        let before = self.windows.len();

        self.windows.retain(|_, window| {
            window.evict(now);
            !window.admitted.is_empty()
        });

        before.saturating_sub(self.windows.len())
    }

    /// Number of keys currently tracked
    pub fn tracked_keys(&self) -> usize {
        self.windows.len()
    }
}
