//! Retry logic with exponential backoff for service operations.
//!
//! This module provides the `RetryContext` for executing operations with automatic retry
//! logic and exponential backoff. By default the error system decides which failures are
//! worth retrying; a context can instead retry every upstream failure.

use std::{future::Future, pin::Pin, time::Duration};

use crate::server::error::{retry::ErrorRetryStrategy, Error};

/// Context for executing operations with automatic retry logic.
///
/// # Retry Behavior
///
/// - **Max attempts**: 3
/// - **Backoff strategy**: Exponential starting at 1 second (1s, 2s, 4s, ...)
/// - **Retry conditions**: Errors with `ErrorRetryStrategy::Retry`, plus every upstream error
///   when built with [`RetryContext::retry_upstream_errors`]
/// - **Permanent failures**: All other errors return immediately
///
/// # Example
///
/// ```ignore
/// let mut ctx = RetryContext::new().retry_upstream_errors();
/// let esi_client = esi_client.clone();
///
/// let is_market_type = ctx
///     .execute_with_retry("market check for type ID 34", || {
///         let esi_client = esi_client.clone();
///
///         Box::pin(async move { Ok(esi_client.get_type(34).await?.is_market_type()) })
///     })
///     .await?;
/// ```
pub struct RetryContext {
    /// Maximum number of attempts before giving up
    max_attempts: u32,
    /// Initial backoff duration (doubles with each retry)
    initial_backoff: Duration,
    /// Retry every upstream error regardless of its status
    retry_upstream: bool,
}

impl Default for RetryContext {
    fn default() -> Self {
        Self::new()
    }
}

impl RetryContext {
    pub const MAX_ATTEMPTS: u32 = 3;
    pub const DEFAULT_INITIAL_BACKOFF: Duration = Duration::from_secs(1);

    /// Creates a new retry context with 3 max attempts and 1 second initial backoff.
    pub fn new() -> Self {
        Self {
            max_attempts: Self::MAX_ATTEMPTS,
            initial_backoff: Self::DEFAULT_INITIAL_BACKOFF,
            retry_upstream: false,
        }
    }

    /// Overrides the initial backoff; tests use `Duration::ZERO`.
    pub fn with_backoff(mut self, initial_backoff: Duration) -> Self {
        self.initial_backoff = initial_backoff;
        self
    }

    /// Retries every upstream failure, including client errors and malformed bodies.
    pub fn retry_upstream_errors(mut self) -> Self {
        self.retry_upstream = true;
        self
    }

    fn strategy_for(&self, error: &Error) -> ErrorRetryStrategy {
        if self.retry_upstream && error.is_upstream() {
            return ErrorRetryStrategy::Retry;
        }

        error.to_retry_strategy()
    }

    /// Executes an operation with automatic retry logic and exponential backoff.
    ///
    /// Runs the provided async operation up to `max_attempts` times, retrying on transient
    /// failures.
    ///
    /// # Arguments
    /// - `description` - Human-readable description for logging (e.g., "market check for type ID 34")
    /// - `operation` - Async function producing one attempt, returning `Result<R, Error>`
    ///
    /// # Returns
    /// - `Ok(R)` - Operation succeeded
    /// - `Err(Error)` - Operation failed permanently or exhausted all retry attempts
    pub async fn execute_with_retry<R, F>(
        &mut self,
        description: &str,
        operation: F,
    ) -> Result<R, Error>
    where
        F: Fn() -> Pin<Box<dyn Future<Output = Result<R, Error>> + Send>>,
    {
        let mut attempt_count = 0;

        loop {
            tracing::debug!(
                "Processing {} (attempt {}/{})",
                description,
                attempt_count + 1,
                self.max_attempts
            );

            match operation().await {
                Ok(result) => {
                    tracing::debug!("Successfully processed {}", description);
                    return Ok(result);
                }
                Err(e) => match self.strategy_for(&e) {
                    ErrorRetryStrategy::Fail => {
                        tracing::error!("Permanent error for {}: {:?}", description, e);
                        return Err(e);
                    }
                    ErrorRetryStrategy::Retry => {
                        attempt_count += 1;
                        if attempt_count >= self.max_attempts {
                            tracing::error!(
                                "Max attempts ({}) exceeded for {}: {:?}",
                                self.max_attempts,
                                description,
                                e
                            );
                            return Err(e);
                        }

                        let backoff = self.initial_backoff * 2_u32.pow(attempt_count - 1);

                        tracing::warn!(
                            "Retrying {} (attempt {}/{}) after {:?}: {:?}",
                            description,
                            attempt_count,
                            self.max_attempts,
                            backoff,
                            e
                        );

                        tokio::time::sleep(backoff).await;
                    }
                },
            }
        }
    }
}
