//! Operations bounded by an explicit deadline.
//!
//! A [`Deadline`] wraps any future; when the limit elapses first the future is
//! dropped (cancelled) and [`DeadlineExceeded`] is returned.

use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{operation}' did not finish within {limit:?}")]
pub struct DeadlineExceeded {
    pub operation: &'static str,
    pub limit: Duration,
}

#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    operation: &'static str,
    limit: Duration,
}

impl Deadline {
    pub fn new(operation: &'static str, limit: Duration) -> Self {
        Self { operation, limit }
    }

    /// Drive `future` to completion or until the deadline, whichever is first
    pub async fn run<F>(&self, future: F) -> Result<F::Output, DeadlineExceeded>
    where
        F: Future,
    {
        tokio::time::timeout(self.limit, future).await.map_err(|_| {
            warn!("'{}' exceeded its deadline of {:?}", self.operation, self.limit);
            DeadlineExceeded {
                operation: self.operation,
                limit: self.limit,
            }
        })
    }

    /// Run `action` once the deadline elapses, independently of any other work.
    ///
    /// The returned handle can be aborted to disarm the backstop.
    pub fn backstop<F, Fut>(&self, action: F) -> JoinHandle<()>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let limit = self.limit;
        tokio::spawn(async move {
            tokio::time::sleep(limit).await;
            action().await;
        })
    }
}
