use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body for resolving a batch of location IDs.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct GetLocationsDto {
    /// Station, structure, solar system, constellation or region IDs; duplicates are ignored
    #[serde(rename = "locationIDs")]
    pub location_ids: Vec<i64>,
}

/// Resolved locations keyed by their ID rendered as a decimal string.
pub type LocationsDto = HashMap<String, Location>;

/// A location with every facet that could be resolved.
///
/// Facets relate by strict containment: a station lives in a solar system, which lives in a
/// constellation, which lives in a region. Whenever a facet is present all of its ancestors
/// are present as well.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constellation: Option<Constellation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solar_system: Option<SolarSystem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub station: Option<Station>,
}

impl Location {
    /// Returns `true` if no facet has been resolved.
    pub fn is_empty(&self) -> bool {
        self.region.is_none()
            && self.constellation.is_none()
            && self.solar_system.is_none()
            && self.station.is_none()
    }

    /// Returns `true` if every present facet has its full ancestor chain.
    pub fn has_complete_ancestry(&self) -> bool {
        let station_ok = self.station.is_none() || self.solar_system.is_some();
        let system_ok = self.solar_system.is_none() || self.constellation.is_some();
        let constellation_ok = self.constellation.is_none() || self.region.is_some();

        station_ok && system_ok && constellation_ok
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Region {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Constellation {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SolarSystem {
    pub id: i64,
    pub name: String,
    pub security_status: f64,
}

/// An NPC station or a player-owned structure.
///
/// NPC stations carry their `type_id` and are always `public`. `type_name`, `first_seen`
/// and `last_seen` are only populated for structures discovered through the third-party
/// structure feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub id: i64,
    pub name: String,
    #[serde(rename = "position")]
    pub coordinates: Coordinates,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_seen: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region() -> Region {
        Region {
            id: 10000002,
            name: "The Forge".to_string(),
        }
    }

    fn constellation() -> Constellation {
        Constellation {
            id: 20000020,
            name: "Kimotoro".to_string(),
        }
    }

    fn solar_system() -> SolarSystem {
        SolarSystem {
            id: 30000142,
            name: "Jita".to_string(),
            security_status: 0.9459,
        }
    }

    #[test]
    fn default_location_is_empty() {
        assert!(Location::default().is_empty());
    }

    #[test]
    fn station_without_system_is_incomplete() {
        let location = Location {
            region: Some(region()),
            constellation: Some(constellation()),
            solar_system: None,
            station: Some(Station {
                id: 60003760,
                name: "Jita IV - Moon 4 - Caldari Navy Assembly Plant".to_string(),
                coordinates: Coordinates::default(),
                type_id: None,
                type_name: None,
                first_seen: None,
                last_seen: None,
                public: None,
            }),
        };

        assert!(!location.has_complete_ancestry());
    }

    #[test]
    fn system_with_ancestors_is_complete() {
        let location = Location {
            region: Some(region()),
            constellation: Some(constellation()),
            solar_system: Some(solar_system()),
            station: None,
        };

        assert!(location.has_complete_ancestry());
    }

    /// Absent facets and structure-only station fields are omitted from JSON
    #[test]
    fn serializes_camel_case_without_absent_facets() {
        let location = Location {
            region: Some(region()),
            constellation: Some(constellation()),
            solar_system: Some(solar_system()),
            station: None,
        };

        let json = serde_json::to_value(&location).unwrap();

        assert_eq!(json["solarSystem"]["securityStatus"], 0.9459);
        assert!(json.get("station").is_none());
    }

    #[test]
    fn request_uses_location_ids_key() {
        let request: GetLocationsDto =
            serde_json::from_str(r#"{"locationIDs": [60003760, 30000142]}"#).unwrap();

        assert_eq!(request.location_ids, vec![60003760, 30000142]);
    }
}
