use std::time::Duration;

use crate::server::{
    error::Error,
    rate_limit::{config::RateLimitPolicy, RateLimitKey, RateLimiter},
    scheduler::{sweep_idle_keys, Scheduler},
};

/// Expect idle keys removed and active keys kept
#[tokio::test]
async fn sweeps_idle_keys() {
    let rate_limiter = RateLimiter::new();
    let short = RateLimitPolicy::new(Duration::from_millis(20), 5);
    let long = RateLimitPolicy::new(Duration::from_secs(60), 5);

    rate_limiter.allow(&RateLimitKey::new("listunspent", "B1T", "idle"), short);
    rate_limiter.allow(&RateLimitKey::new("listunspent", "B1T", "busy"), long);
    tokio::time::sleep(Duration::from_millis(40)).await;

    assert_eq!(sweep_idle_keys(&rate_limiter), 1);
    assert_eq!(rate_limiter.tracked_keys(), 1);
}

/// Expect the sweep job to register and the scheduler to start
#[tokio::test]
async fn starts_with_sweep_job() -> Result<(), Error> {
    let scheduler = Scheduler::new(RateLimiter::new()).await?;

    scheduler.start().await?;

    Ok(())
}

/// Expect an invalid cron expression to be rejected
#[tokio::test]
async fn rejects_invalid_cron_expression() -> Result<(), Error> {
    let mut scheduler = Scheduler::new(RateLimiter::new()).await?;

    let result = scheduler
        .schedule_job("not a cron", "broken", sweep_idle_keys)
        .await;

    assert!(result.is_err());

    Ok(())
}
