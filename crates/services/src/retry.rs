//! Exponential backoff with jitter for provider fetches.

use std::future::Future;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    pub max_attempts: usize,
    pub base_backoff: Duration,
    pub max_backoff: Duration,
    pub jitter_max: Option<Duration>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_backoff: Duration::from_millis(250),
            max_backoff: Duration::from_secs(2),
            jitter_max: Some(Duration::from_millis(100)),
        }
    }
}

impl RetryConfig {
    /// A single attempt, no waiting.
    #[must_use]
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            base_backoff: Duration::ZERO,
            max_backoff: Duration::ZERO,
            jitter_max: None,
        }
    }

    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    fn wait_for(&self, backoff: Duration) -> Duration {
        let extra = match self.jitter_max {
            Some(jitter) if !jitter.is_zero() => {
                let jitter_ms = u64::try_from(jitter.as_millis()).unwrap_or(u64::MAX);
                Duration::from_millis(rand::random_range(0..=jitter_ms))
            }
            _ => Duration::ZERO,
        };
        backoff + extra
    }
}

/// Run `f` until it succeeds, `should_retry` rejects the error, or attempts run out.
///
/// `f` receives the 1-based attempt number.
///
/// # Errors
///
/// Returns the last error produced by `f`.
pub async fn retry_async<F, Fut, T, E, P>(
    config: &RetryConfig,
    mut should_retry: P,
    mut f: F,
) -> Result<T, E>
where
    F: FnMut(usize) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    P: FnMut(&E) -> bool,
{
    let max_attempts = config.max_attempts.max(1);
    let mut backoff = config.base_backoff;
    let mut attempt = 1;

    loop {
        match f(attempt).await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if attempt >= max_attempts || !should_retry(&err) {
                    return Err(err);
                }
                tokio::time::sleep(config.wait_for(backoff)).await;
                backoff = std::cmp::min(backoff * 2, config.max_backoff);
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn fast(max_attempts: usize) -> RetryConfig {
        RetryConfig {
            max_attempts,
            base_backoff: Duration::from_millis(1),
            max_backoff: Duration::from_millis(4),
            jitter_max: None,
        }
    }

    #[tokio::test]
    async fn succeeds_after_transient_failures() {
        let calls = AtomicUsize::new(0);
        let res: Result<usize, &str> = retry_async(
            &fast(3),
            |_| true,
            |attempt| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move { if attempt < 3 { Err("flaky") } else { Ok(attempt) } }
            },
        )
        .await;

        assert_eq!(res, Ok(3));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn gives_up_after_max_attempts() {
        let calls = AtomicUsize::new(0);
        let res: Result<(), &str> = retry_async(
            &fast(2),
            |_| true,
            |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err("down") }
            },
        )
        .await;

        assert_eq!(res, Err("down"));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn non_retryable_error_stops_immediately() {
        let calls = AtomicUsize::new(0);
        let res: Result<(), &str> = retry_async(
            &fast(5),
            |err| *err != "fatal",
            |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err("fatal") }
            },
        )
        .await;

        assert_eq!(res, Err("fatal"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn with_max_attempts_never_drops_below_one() {
        assert_eq!(RetryConfig::default().with_max_attempts(0).max_attempts, 1);
        assert_eq!(RetryConfig::none().max_attempts, 1);
    }
}
