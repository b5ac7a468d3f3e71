//! Refresh jobs run by the scheduler.
//!
//! Each job takes an owned copy of the application state so it can be spawned on its own
//! task, and returns the number of entries written.

use crate::server::{
    error::Error,
    model::app::AppState,
    service::{
        market_type::MarketTypeService, region::RegionService, structure::StructureService,
    },
};

/// Imports every structure from the structure feed.
pub async fn refresh_structures(state: AppState) -> Result<usize, Error> {
    StructureService::new(&state.db, &state.esi_client, &state.structure_client)
        .refresh_structures()
        .await
}

/// Refreshes every region.
pub async fn refresh_regions(state: AppState) -> Result<usize, Error> {
    RegionService::new(&state.db, &state.esi_client)
        .refresh_regions()
        .await
}

/// Rebuilds the market type set.
pub async fn refresh_market_types(state: AppState) -> Result<usize, Error> {
    MarketTypeService::new(&state.db, &state.esi_client)
        .refresh_market_types()
        .await
}
