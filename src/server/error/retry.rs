use sea_orm::DbErr;

use super::{cache::CacheError, upstream::UpstreamError, Error};

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (server errors)
    Retry,
    /// Failed permanently (bad request)
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::UpstreamError(upstream_error) => upstream_error.to_retry_strategy(),

            // Cache errors only retry when the connection itself was the problem
            Self::CacheError(CacheError::ReadFailed { source, .. })
            | Self::CacheError(CacheError::WriteFailed { source, .. }) => {
                db_retry_strategy(source)
            }
            Self::CacheError(CacheError::Corrupt { .. }) => ErrorRetryStrategy::Fail,

            Self::DbErr(db_err) => db_retry_strategy(db_err),

            // Configuration errors - permanent failures, won't resolve with retry
            Self::ConfigError(_) => ErrorRetryStrategy::Fail,

            // Location errors - the ID is invalid or unsupported, retrying changes nothing
            Self::LocationError(_) => ErrorRetryStrategy::Fail,

            Self::MarketTypeError(_) => ErrorRetryStrategy::Fail,

            Self::SchedulerError(_) => ErrorRetryStrategy::Fail,

            // InternalError - permanent failures (internal error within the service's code)
            Self::InternalError(_) => ErrorRetryStrategy::Fail,
        }
    }
}

impl UpstreamError {
    /// Determine retry strategy for a failed upstream call
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            // Client construction and body decoding fail the same way on every attempt
            UpstreamError::Client(_) | UpstreamError::Decode { .. } => {
                return ErrorRetryStrategy::Fail
            }
            UpstreamError::Request { .. } | UpstreamError::Status { .. } => (),
        }

        match self.status() {
            // 500 - Upstream temporarily unavailable
            Some(status) if status.is_server_error() => ErrorRetryStrategy::Retry,

            // 429 - Rate limited, backoff gives the limit a chance to reset
            Some(status) if status.as_u16() == 429 => ErrorRetryStrategy::Retry,

            // 400 - We're making invalid requests, retrying won't help
            Some(_) => ErrorRetryStrategy::Fail,

            // Network error or connection issue - should retry
            None => ErrorRetryStrategy::Retry,
        }
    }
}

fn db_retry_strategy(db_err: &DbErr) -> ErrorRetryStrategy {
    match db_err {
        // Connection acquisition errors - transient, should retry
        DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
        // Connection errors - transient, should retry
        DbErr::Conn(_) => ErrorRetryStrategy::Retry,

        // Query, conversion and schema errors are permanent failures
        _ => ErrorRetryStrategy::Fail,
    }
}
