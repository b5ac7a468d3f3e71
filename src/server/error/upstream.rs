use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// A call to the universe API or the structure feed failed.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// The HTTP client could not be constructed (TLS backend initialisation).
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    /// Transport level failure (connect, timeout, reset).
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The upstream answered with a non-success status.
    #[error("Request to {url} returned status {status}")]
    Status { url: String, status: StatusCode },
    /// The body could not be decoded into the expected shape.
    #[error("Response from {url} could not be decoded: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl UpstreamError {
    /// HTTP status returned by the upstream, if the request got that far.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Request { source, .. } | Self::Decode { source, .. } => source.status(),
            Self::Client(_) => None,
        }
    }
}

impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        tracing::warn!("Upstream error: {}", self);

        error_response(StatusCode::BAD_GATEWAY, "Upstream API request failed")
    }
}
