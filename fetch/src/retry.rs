use std::time::Duration;

/// How a failed fetch is retried: a fixed number of extra attempts, each after the same delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub retries: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy::new(1, Self::DEFAULT_DELAY)
    }
}

impl RetryPolicy {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(5000);

    pub const fn new(retries: u32, delay: Duration) -> Self {
        RetryPolicy { retries, delay }
    }

    /// single attempt, never retried
    pub const fn none() -> Self {
        RetryPolicy::new(0, Duration::ZERO)
    }

    /// Called after the `failures`th failed attempt. Sleeps for the delay and returns `true` if
    /// another attempt is allowed, otherwise returns `false` immediately.
    pub async fn wait_your_turn(&self, failures: u32) -> bool {
        if failures > self.retries {
            return false;
        }
        tokio::time::sleep(self.delay).await;
        true
    }
}
