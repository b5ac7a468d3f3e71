use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        location::{GetLocationsDto, Location, LocationsDto},
    },
    server::{error::Error, model::app::AppState, service::location::LocationService},
};

pub static LOCATION_TAG: &str = "location";

/// Resolve a batch of location IDs
///
/// Every distinct ID is resolved independently. IDs that could not be resolved are left
/// out of the response.
///
/// # Responses
/// - 200 (OK): Every ID resolved (an empty request yields an empty object)
/// - 206 (Partial Content): Some IDs could not be resolved; the rest are returned
/// - 502 (Bad Gateway): No ID could be resolved
#[utoipa::path(
    post,
    path = "/api/locations",
    tag = LOCATION_TAG,
    request_body = GetLocationsDto,
    responses(
        (status = 200, description = "All locations resolved", body = HashMap<String, Location>),
        (status = 206, description = "Some locations could not be resolved", body = HashMap<String, Location>),
        (status = 502, description = "No location could be resolved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_locations(
    State(state): State<AppState>,
    Json(request): Json<GetLocationsDto>,
) -> Result<impl IntoResponse, Error> {
    let location_service = LocationService::new(&state.db, &state.esi_client, state.classifier);

    let resolution = location_service.resolve_many(&request.location_ids).await;
    let error = resolution.error();

    let locations: LocationsDto = resolution
        .locations
        .into_iter()
        .map(|(id, location)| (id.to_string(), location))
        .collect();

    match error {
        None => Ok((StatusCode::OK, Json(locations)).into_response()),
        Some(e) if locations.is_empty() => Err(e.into()),
        Some(e) => {
            tracing::warn!("Returning partial location batch: {}", e);

            Ok((StatusCode::PARTIAL_CONTENT, Json(locations)).into_response())
        }
    }
}
