use axum::{body::to_bytes, http::StatusCode, response::Response};
use serde_json::Value;

mod location;
mod market_type;

/// Splits a response into its status and decoded JSON body.
async fn into_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let body = serde_json::from_slice(&bytes).expect("Response body is not JSON");

    (status, body)
}
