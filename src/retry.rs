//! Fixed-delay retry and pacing policy

use async_trait::async_trait;
use std::time::Duration;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 2;
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(20);
pub const DEFAULT_PACE_DELAY: Duration = Duration::from_secs(1);

/// How often a domain lookup is attempted and how long to wait in between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts per domain, first one included
    pub max_attempts: u32,
    /// Wait before every attempt after the first
    pub retry_delay: Duration,
    /// Wait between consecutive domains
    pub pace_delay: Duration,
}

impl RetryPolicy {
    pub fn new(retries: u32, retry_delay: Duration, pace_delay: Duration) -> Self {
        Self {
            max_attempts: retries.saturating_add(1),
            retry_delay,
            pace_delay,
        }
    }

    /// Wait required before `attempt` (1-based).
    ///
    /// `None` for the first attempt and for attempts past the limit. The
    /// delay is fixed, it does not grow with the attempt number.
    pub fn delay_before(&self, attempt: u32) -> Option<Duration> {
        if attempt >= 2 && attempt <= self.max_attempts {
            Some(self.retry_delay)
        } else {
            None
        }
    }

    /// Whether another attempt is allowed after `attempt` failed
    pub fn should_retry(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_delay: DEFAULT_RETRY_DELAY,
            pace_delay: DEFAULT_PACE_DELAY,
        }
    }
}

/// Blocking pause between requests
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Real wall-clock sleep
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
