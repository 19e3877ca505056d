use std::future::Future;
use std::time::Duration;

use scrum_core::ScrumResult;

/// Generic retry wrapper for backend calls.
///
/// Only transient failures (connection errors) are retried; validation,
/// not-found and conflict errors come back on the first attempt. Backoff
/// doubles per attempt and is capped.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(50),
            max_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    pub async fn run<T, F, Fut>(&self, mut op: F) -> ScrumResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = ScrumResult<T>>,
    {
        let mut attempt = 0;
        let mut delay = self.initial_delay;

        loop {
            attempt += 1;
            match op().await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_transient() && attempt < self.max_attempts => {
                    tracing::warn!(
                        "Backend call failed (attempt {}/{}): {}. Retrying after {:?}...",
                        attempt,
                        self.max_attempts,
                        e,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    delay = (delay * 2).min(self.max_delay);
                }
                Err(e) => return Err(e),
            }
        }
    }
}
