use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Errors raised while classifying or resolving a location ID.
#[derive(Error, Debug)]
pub enum LocationError {
    /// The ID falls outside every known location band; no upstream call was made.
    #[error("Location ID {0} is not within a valid location ID range")]
    InvalidIdentifierRange(i64),
    /// The name lookup succeeded but returned no category this service can resolve.
    #[error("Location ID {id} has unsupported category {category:?}")]
    UnknownCategory { id: i64, category: String },
    /// Structures are only discoverable through the bulk structure feed.
    #[error("Structure ID {0} is not present in the current structure dataset")]
    UnknownStructure(i64),
    /// Aggregate error of a batch in which some IDs could not be resolved.
    #[error("Could not resolve {failed} of {requested} location ID(s)")]
    IncompleteBatch { failed: usize, requested: usize },
}

impl IntoResponse for LocationError {
    fn into_response(self) -> Response {
        tracing::debug!("Location error: {}", self);

        match self {
            Self::InvalidIdentifierRange(_) | Self::UnknownCategory { .. } => {
                error_response(StatusCode::BAD_REQUEST, self.to_string())
            }
            Self::UnknownStructure(_) => error_response(StatusCode::NOT_FOUND, self.to_string()),
            Self::IncompleteBatch { .. } => {
                error_response(StatusCode::BAD_GATEWAY, self.to_string())
            }
        }
    }
}
