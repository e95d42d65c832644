//! Bounded retry-with-delay combinator.
//!
//! Replaces ad hoc attempt counters: callers hand over a probe that either
//! yields a value or signals "not yet", and get back a typed outcome. An
//! exhausted loop is always observable to the caller.

use std::future::Future;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            delay: Duration::from_millis(1000),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum RetryOutcome<T> {
    Ready(T),
    Exhausted,
}

impl<T> RetryOutcome<T> {
    pub fn ready(self) -> Option<T> {
        match self {
            RetryOutcome::Ready(v) => Some(v),
            RetryOutcome::Exhausted => None,
        }
    }
}

/// Run `probe` up to `policy.max_attempts` times, sleeping `policy.delay`
/// between attempts. The first `Some` short-circuits.
pub async fn retry_until<T, F, Fut>(policy: RetryPolicy, mut probe: F) -> RetryOutcome<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Option<T>>,
{
    for attempt in 1..=policy.max_attempts.max(1) {
        if let Some(value) = probe().await {
            return RetryOutcome::Ready(value);
        }
        if attempt < policy.max_attempts {
            tracing::debug!(attempt, "probe not ready, retrying");
            tokio::time::sleep(policy.delay).await;
        }
    }
    RetryOutcome::Exhausted
}
