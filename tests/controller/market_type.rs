use axum::{extract::State, http::StatusCode, response::IntoResponse};
use static_data::server::{controller::market_type::get_market_types, model::app::AppState};
use static_data_test_utils::prelude::*;

use super::into_json;

/// Tests getting market types after a refresh has stored them.
///
/// Expected: 200 with the stored IDs under `typeIds`
#[tokio::test]
async fn returns_stored_market_types() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_location_tables()
        .with_market_types(vec![34, 35, 36])
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let response = get_market_types(State(state)).await.into_response();
    let (status, body) = into_json(response).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "typeIds": [34, 35, 36] }));

    Ok(())
}

/// Tests getting market types before any refresh has completed.
///
/// Expected: 404 with the error body
#[tokio::test]
async fn returns_not_found_when_never_populated() -> Result<(), TestError> {
    let test = test_setup_with_location_tables!()?;
    let state: AppState = test.to_app_state();

    let response = get_market_types(State(state)).await.into_response();
    let (status, body) = into_json(response).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Error retrieving types");

    Ok(())
}
