use std::time::Duration;

use crate::application::ports::ExtractionError;

/// Runs CPU- or process-bound extraction work off the async runtime, bounded by `timeout`.
pub(super) async fn run_blocking<T, F>(timeout: Duration, task: F) -> Result<T, ExtractionError>
where
    F: FnOnce() -> Result<T, ExtractionError> + Send + 'static,
    T: Send + 'static,
{
    tokio::time::timeout(timeout, tokio::task::spawn_blocking(task))
        .await
        .map_err(|_| ExtractionError::TimedOut)?
        .map_err(|e| ExtractionError::TaskFailed(format!("task join error: {e}")))?
}
