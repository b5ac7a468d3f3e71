//! Error types for the static data service.
//!
//! Errors are split by domain (configuration, location resolution, market types, upstream
//! APIs and the cache store) and aggregated into [`Error`]. Every error maps onto an HTTP
//! response through `IntoResponse`, and onto a retry decision through
//! [`Error::to_retry_strategy`](retry).

pub mod cache;
pub mod config;
pub mod location;
pub mod market;
pub mod retry;
pub mod upstream;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        cache::CacheError, config::ConfigError, location::LocationError, market::MarketTypeError,
        upstream::UpstreamError,
    },
};

/// Main error type for the static data service.
///
/// Domain errors convert into this type with `?`; storage engine errors that occur outside
/// of a repository (connecting, migrating) are carried as raw `DbErr`.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (an environment variable with an invalid value).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Location resolution error (invalid identifier, unknown category or structure).
    #[error(transparent)]
    LocationError(#[from] LocationError),
    /// Market type cache error.
    #[error(transparent)]
    MarketTypeError(#[from] MarketTypeError),
    /// An upstream API call failed (transport, status or body).
    #[error(transparent)]
    UpstreamError(#[from] UpstreamError),
    /// The cache store could not be read or written.
    #[error(transparent)]
    CacheError(#[from] CacheError),
    /// Database error outside of cache reads and writes (connection, migrations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
    /// Internal error indicating a bug in the service.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
}

impl Error {
    /// Returns `true` if the error was caused by an upstream API call.
    ///
    /// Only upstream failures are eligible for the stale cache fallback; invalid identifiers
    /// and cache failures always propagate.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::UpstreamError(_))
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Identifiers outside every known range
/// - 404 Not Found - Market types never populated, unknown structures
/// - 502 Bad Gateway - Upstream API failures
/// - 500 Internal Server Error - Everything else (logged)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::LocationError(err) => err.into_response(),
            Self::MarketTypeError(err) => err.into_response(),
            Self::UpstreamError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns a generic message so implementation details are not leaked
/// to clients.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

/// Builds a JSON error response with the provided status and message.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}
