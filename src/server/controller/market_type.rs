use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, market::MarketTypesDto},
    server::{error::Error, model::app::AppState, service::market_type::MarketTypeService},
};

pub static MARKET_TYPE_TAG: &str = "market type";

/// Get the IDs of every type that can be traded on the market
#[utoipa::path(
    get,
    path = "/api/market-types",
    tag = MARKET_TYPE_TAG,
    responses(
        (status = 200, description = "Market type IDs", body = MarketTypesDto),
        (status = 404, description = "Market types have not been loaded yet", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_market_types(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let market_type_service = MarketTypeService::new(&state.db, &state.esi_client);

    let type_ids = market_type_service.get_market_types().await?;

    Ok((StatusCode::OK, Json(MarketTypesDto { type_ids })))
}
