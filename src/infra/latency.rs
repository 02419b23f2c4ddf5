//! Artificial latency and cancellation for mock requests.
//!
//! Every operation waits out its delay first and only then touches the
//! store, so a request aborted while pending never has an effect.

use std::future::Future;
use std::time::Duration;

use futures::future::{abortable, AbortHandle};
use tokio::time::sleep;

use crate::errors::{AppError, AppResult};

/// Fixed delay applied before an operation settles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Latency {
    delay: Duration,
}

impl Latency {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    /// No delay at all
    pub fn none() -> Self {
        Self::default()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Wait out the delay. Callers touch the store only after this returns.
    pub async fn elapse(self) {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
    }
}

/// Wrap a pending request so it can be aborted before it settles.
///
/// Aborting yields [`AppError::Cancelled`]; aborting after settlement is a no-op.
///
/// # Example
/// ```ignore
/// let users = services.users();
/// let (request, handle) = cancellable(users.delete_user(id));
/// handle.abort();
/// assert_eq!(request.await, Err(AppError::Cancelled));
/// ```
pub fn cancellable<F, T>(future: F) -> (impl Future<Output = AppResult<T>>, AbortHandle)
where
    F: Future<Output = AppResult<T>>,
{
    let (request, handle) = abortable(future);
    let settled = async move {
        request.await.unwrap_or_else(|_| {
            tracing::debug!("Request aborted before settling");
            Err(AppError::Cancelled)
        })
    };
    (settled, handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_elapse_waits_for_delay() {
        let start = Instant::now();

        Latency::from_millis(250).elapse().await;

        assert!(start.elapsed() >= Duration::from_millis(250));
    }

    #[tokio::test(start_paused = true)]
    async fn test_abort_while_pending_skips_operation() {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = ran.clone();
        let latency = Latency::from_millis(250);

        let (request, handle) = cancellable(async move {
            latency.elapse().await;
            flag.store(true, Ordering::SeqCst);
            Ok::<(), AppError>(())
        });
        let pending = tokio::spawn(request);

        tokio::time::sleep(Duration::from_millis(100)).await;
        handle.abort();

        assert_eq!(pending.await.unwrap(), Err(AppError::Cancelled));
        assert!(!ran.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_abort_after_settle_is_noop() {
        let (request, handle) = cancellable(async { Ok::<_, AppError>("done") });
        let result = request.await;
        handle.abort();

        assert_eq!(result, Ok("done"));
    }
}
