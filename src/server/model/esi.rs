//! Response bodies of the universe API endpoints used for location and type lookups.
//!
//! Only the fields the service consumes are declared; everything else in the upstream
//! payload is ignored during deserialization.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EsiPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EsiStation {
    pub station_id: i64,
    pub name: String,
    pub position: EsiPosition,
    pub system_id: i64,
    #[serde(default)]
    pub type_id: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EsiSolarSystem {
    pub system_id: i64,
    pub name: String,
    pub security_status: f64,
    pub constellation_id: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EsiConstellation {
    pub constellation_id: i64,
    pub name: String,
    pub region_id: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EsiRegion {
    pub region_id: i64,
    pub name: String,
}

/// One entry of the universe names lookup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EsiName {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EsiType {
    pub type_id: i64,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub market_group_id: Option<i64>,
}

impl EsiType {
    /// A type is tradable when it is published and belongs to a market group.
    pub fn is_market_type(&self) -> bool {
        self.published && self.market_group_id.is_some_and(|group_id| group_id != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests market type detection across published and market group combinations.
    ///
    /// Expected: only published types with a non-zero market group qualify
    #[test]
    fn market_type_requires_published_and_market_group() {
        let mut esi_type = EsiType {
            type_id: 34,
            published: true,
            market_group_id: Some(1857),
        };
        assert!(esi_type.is_market_type());

        esi_type.market_group_id = Some(0);
        assert!(!esi_type.is_market_type());

        esi_type.market_group_id = None;
        assert!(!esi_type.is_market_type());

        esi_type.published = false;
        esi_type.market_group_id = Some(1857);
        assert!(!esi_type.is_market_type());
    }
}
