use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;

static RETRY_AFTER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"try again in (?P<seconds>\d+(?:\.\d+)?)s").ok());

pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;
pub const DEFAULT_RATE_LIMIT_WAIT: Duration = Duration::from_secs(60);

/// How many times a rate-limited completion is attempted and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub default_wait: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, default_wait: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            default_wait,
        }
    }

    /// Wait before the next attempt: the server's hint when present, otherwise the default.
    pub fn delay_for(&self, error_message: &str) -> Duration {
        parse_retry_after(error_message).unwrap_or(self.default_wait)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_RATE_LIMIT_WAIT)
    }
}

/// Extracts the delay from messages such as "Please try again in 12.5s."
pub fn parse_retry_after(message: &str) -> Option<Duration> {
    let captures = RETRY_AFTER.as_ref()?.captures(message)?;
    let seconds: f64 = captures.name("seconds")?.as_str().parse().ok()?;
    Duration::try_from_secs_f64(seconds).ok()
}
