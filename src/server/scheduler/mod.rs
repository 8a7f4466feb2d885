//! Cron scheduler for periodic maintenance.
//!
//! The only job removes rate limiter keys whose admissions have all expired, so the limiter's
//! memory stays bounded by the keys seen within the longest window.

use std::sync::Arc;

use dioxus_logger::tracing;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::Error,
    rate_limit::{config::SWEEP_CRON_EXPRESSION, RateLimiter},
};

#[cfg(test)]
mod tests;

/// Remove idle rate limiter keys, returning how many were removed.
pub fn sweep_idle_keys(rate_limiter: &RateLimiter) -> usize {
    rate_limiter.sweep()
}

pub struct Scheduler {
    rate_limiter: RateLimiter,
    sched: JobScheduler,
}

impl Scheduler {
    /// # Arguments
    /// - `rate_limiter` - Limiter shared with the request handlers
    pub async fn new(rate_limiter: RateLimiter) -> Result<Self, Error> {
        let sched = JobScheduler::new().await?;
        Ok(Self {
            rate_limiter,
            sched,
        })
    }

    /// Registers all jobs and starts the scheduler.
    pub async fn start(mut self) -> Result<(), Error> {
        self.schedule_job(SWEEP_CRON_EXPRESSION, "rate limiter sweep", sweep_idle_keys)
            .await?;

        self.sched.start().await?;

        Ok(())
    }

    /// Schedules `function` to run on the `cron` expression.
    ///
    /// # Arguments
    /// - `cron` - Cron expression with seconds, e.g. "0 * * * * *" for every minute
    /// - `name` - Job name used in log messages
    /// - `function` - Job body, returning the number of entries it processed
    pub async fn schedule_job<F>(&mut self, cron: &str, name: &str, function: F) -> Result<(), Error>
    where
        F: Fn(&RateLimiter) -> usize + Send + Sync + 'static,
    {
        let rate_limiter = self.rate_limiter.clone();
        let name = name.to_string();
        let function = Arc::new(function);

        self.sched
            .add(Job::new_async(cron, move |_, _| {
                let rate_limiter = rate_limiter.clone();
                let name = name.clone();
                let function = Arc::clone(&function);

                Box::pin(async move {
                    let count = function(&rate_limiter);
                    tracing::debug!("{} processed {} entries", name, count);
                })
            })?)
            .await?;

        Ok(())
    }
}
