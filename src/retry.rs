//! Generic retry with exponential backoff.
//!
//! [`with_retry`] wraps an arbitrary asynchronous operation and re-invokes
//! it on failure, waiting `base_delay * multiplier^(attempt - 1)` between
//! attempts. It knows nothing about HTTP; the same wrapper drives the
//! connectivity probe, category index fetches, and article fetches.
//!
//! # Retry Strategy
//!
//! - Up to [`RetryPolicy::max_attempts`] invocations (first call included)
//! - Exponential backoff: with the defaults, 2s then 4s between attempts
//! - On exhaustion, the error from the final attempt is returned; earlier
//!   attempts' errors are logged but not retained

use crate::config::RetryPolicy;
use std::fmt::Display;
use std::future::Future;
use std::time::Instant;
use tokio::time::sleep;
use tracing::{error, warn};

/// Invoke `operation` until it succeeds or the attempt limit is reached.
///
/// `operation` is called at least once even when the policy allows zero
/// attempts. Backoff is applied after every failed attempt except the last;
/// the final attempt's error is returned as-is.
///
/// # Arguments
///
/// * `policy` - Attempt limit and backoff shape
/// * `operation` - Closure producing a fresh future per attempt
pub async fn with_retry<T, E, F, Fut>(policy: &RetryPolicy, mut operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let max_attempts = policy.max_attempts.max(1);
    let total_t0 = Instant::now();
    let mut attempt = 1usize;

    loop {
        let attempt_t0 = Instant::now();
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) => {
                let attempt_dt = attempt_t0.elapsed();
                let total_dt = total_t0.elapsed();

                if attempt >= max_attempts {
                    error!(
                        attempt,
                        max = max_attempts,
                        elapsed_ms_attempt = attempt_dt.as_millis() as u64,
                        elapsed_ms_total = total_dt.as_millis() as u64,
                        error = %e,
                        "operation exhausted retries"
                    );
                    return Err(e);
                }

                let delay = policy.delay_for(attempt);
                warn!(
                    attempt,
                    max = max_attempts,
                    elapsed_ms_attempt = attempt_dt.as_millis() as u64,
                    elapsed_ms_total = total_dt.as_millis() as u64,
                    ?delay,
                    error = %e,
                    "attempt failed; backing off"
                );
                sleep(delay).await;
                attempt += 1;
            }
        }
    }
}
