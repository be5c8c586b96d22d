//! Retry policy for upload strategies.

use crate::traits::StorageResult;
use std::future::Future;
use std::time::Duration;

/// Fixed-attempt retry with a doubling delay. A delay is observed after every
/// failed attempt, including the last one, before the final error surfaces.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        RetryPolicy {
            max_attempts,
            base_delay,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Run `op` until it succeeds or attempts are exhausted. The operation
    /// receives the 1-based attempt index.
    pub async fn run<T, F, Fut>(&self, label: &str, mut op: F) -> StorageResult<T>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = StorageResult<T>>,
    {
        let mut delay = self.base_delay;
        let mut last_err = None;

        for attempt in 1..=self.max_attempts {
            match op(attempt).await {
                Ok(value) => {
                    if attempt > 1 {
                        tracing::info!(strategy = label, attempt, "Upload succeeded after retry");
                    }
                    return Ok(value);
                }
                Err(e) => {
                    tracing::warn!(
                        strategy = label,
                        attempt,
                        max_attempts = self.max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Upload attempt failed"
                    );
                    last_err = Some(e);
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
            }
        }

        // max_attempts is always >= 1, so last_err is populated here.
        Err(last_err.unwrap_or(crate::traits::StorageError::UploadFailed(
            "No attempts were made".to_string(),
        )))
    }
}
