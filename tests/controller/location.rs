use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use static_data::{
    model::location::GetLocationsDto,
    server::{controller::location::get_locations, model::app::AppState},
};
use static_data_test_utils::{
    constant::{REGION_ID, SOLAR_SYSTEM_ID, STATION_ID},
    prelude::*,
};

use super::into_json;

fn request(location_ids: Vec<i64>) -> Json<GetLocationsDto> {
    Json(GetLocationsDto { location_ids })
}

/// Tests resolving a batch where every ID is cached.
///
/// Expected: 200 with every ID keyed by its decimal string
#[tokio::test]
async fn returns_ok_when_all_resolve() -> Result<(), TestError> {
    let expires_at = Utc::now().timestamp() + 3600;
    let test = TestBuilder::new()
        .with_location_tables()
        .with_cached_location(STATION_ID, expires_at, factory::station_location(STATION_ID))
        .with_cached_location(
            SOLAR_SYSTEM_ID,
            expires_at,
            factory::solar_system_location(SOLAR_SYSTEM_ID),
        )
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let response = get_locations(State(state), request(vec![STATION_ID, SOLAR_SYSTEM_ID]))
        .await
        .into_response();
    let (status, body) = into_json(response).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_object().unwrap().len(), 2);

    let station = &body[STATION_ID.to_string()];
    assert_eq!(station["station"]["name"], factory::station_name(STATION_ID));
    assert_eq!(station["solarSystem"]["securityStatus"], factory::SECURITY_STATUS);
    assert_eq!(station["region"]["id"], REGION_ID);
    assert!(body[SOLAR_SYSTEM_ID.to_string()].get("station").is_none());

    Ok(())
}

/// Tests resolving a batch where one ID is outside every location range.
///
/// Expected: 206 with only the resolvable ID
#[tokio::test]
async fn returns_partial_content_when_some_fail() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_location_tables()
        .with_cached_location(
            STATION_ID,
            Utc::now().timestamp() + 3600,
            factory::station_location(STATION_ID),
        )
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let response = get_locations(State(state), request(vec![STATION_ID, 5]))
        .await
        .into_response();
    let (status, body) = into_json(response).await;

    assert_eq!(status, StatusCode::PARTIAL_CONTENT);
    assert_eq!(body.as_object().unwrap().len(), 1);
    assert!(body.get(STATION_ID.to_string()).is_some());

    Ok(())
}

/// Tests resolving a batch where no ID can be resolved.
///
/// Expected: 502 with an error body
#[tokio::test]
async fn returns_bad_gateway_when_all_fail() -> Result<(), TestError> {
    let test = test_setup_with_location_tables!()?;
    let state: AppState = test.to_app_state();

    let response = get_locations(State(state), request(vec![5, 45_000_000]))
        .await
        .into_response();
    let (status, body) = into_json(response).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].is_string());

    Ok(())
}

/// Tests resolving an empty batch.
///
/// Expected: 200 with an empty object
#[tokio::test]
async fn returns_empty_object_for_empty_request() -> Result<(), TestError> {
    let test = test_setup_with_location_tables!()?;
    let state: AppState = test.to_app_state();

    let response = get_locations(State(state), request(Vec::new()))
        .await
        .into_response();
    let (status, body) = into_json(response).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({}));

    Ok(())
}
