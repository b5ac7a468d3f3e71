use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum MarketTypeError {
    /// No market type refresh has ever completed.
    #[error("Market types have not been loaded yet")]
    NotFound,
}

impl IntoResponse for MarketTypeError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        match self {
            Self::NotFound => error_response(StatusCode::NOT_FOUND, "Error retrieving types"),
        }
    }
}
