//! Shared utilities for use cases.
//!
//! Contains the timeout wrapper used around every remote source call.

use crate::ports::sources::SourceError;
use std::future::Future;
use std::time::Duration;

/// Await a source call, failing with [`SourceError::Timeout`] once `timeout` elapses.
pub(crate) async fn with_timeout<T, F>(timeout: Option<Duration>, call: F) -> Result<T, SourceError>
where
    F: Future<Output = Result<T, SourceError>>,
{
    match timeout {
        Some(limit) => tokio::time::timeout(limit, call)
            .await
            .map_err(|_| SourceError::Timeout)?,
        None => call.await,
    }
}
