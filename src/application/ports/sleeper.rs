use std::time::Duration;

use async_trait::async_trait;

/// Timer seam for retry backoff.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}
