use serde::{Deserialize, Serialize};

/// Type IDs that can be traded on the open market.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarketTypesDto {
    pub type_ids: Vec<i64>,
}
