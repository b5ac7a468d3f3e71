//! Upstream response bodies and cached location values.
//!
//! Names and figures are derived from the ID so that assertions can recompute them.

use serde_json::{json, Value};

use crate::constant::{CONSTELLATION_ID, REGION_ID, SOLAR_SYSTEM_ID};

pub fn region_name(region_id: i64) -> String {
    format!("Region {}", region_id)
}

pub fn constellation_name(constellation_id: i64) -> String {
    format!("Constellation {}", constellation_id)
}

pub fn solar_system_name(system_id: i64) -> String {
    format!("System {}", system_id)
}

pub fn station_name(station_id: i64) -> String {
    format!("Station {}", station_id)
}

pub fn structure_name(structure_id: i64) -> String {
    format!("Structure {}", structure_id)
}

/// Security status used for every mock solar system.
pub const SECURITY_STATUS: f64 = 0.9459;

/// Create a mock `/universe/stations/{id}/` body.
pub fn station(station_id: i64, system_id: i64) -> Value {
    json!({
        "station_id": station_id,
        "name": station_name(station_id),
        "system_id": system_id,
        "type_id": 1531,
        "owner": 1000035,
        "position": { "x": 1.0, "y": 2.0, "z": 3.0 },
    })
}

/// Create a mock `/universe/systems/{id}/` body.
pub fn solar_system(system_id: i64, constellation_id: i64) -> Value {
    json!({
        "system_id": system_id,
        "name": solar_system_name(system_id),
        "security_status": SECURITY_STATUS,
        "constellation_id": constellation_id,
        "star_id": 40009076,
    })
}

/// Create a mock `/universe/constellations/{id}/` body.
pub fn constellation(constellation_id: i64, region_id: i64) -> Value {
    json!({
        "constellation_id": constellation_id,
        "name": constellation_name(constellation_id),
        "region_id": region_id,
        "systems": [],
    })
}

/// Create a mock `/universe/regions/{id}/` body.
pub fn region(region_id: i64) -> Value {
    json!({
        "region_id": region_id,
        "name": region_name(region_id),
        "constellations": [],
    })
}

/// Create a mock `/universe/names/` body for a single ID.
pub fn names(id: i64, category: &str) -> Value {
    json!([{ "id": id, "name": format!("Name {}", id), "category": category }])
}

/// Create a mock `/universe/types/{id}/` body.
pub fn esi_type(type_id: i64, published: bool, market_group_id: Option<i64>) -> Value {
    let mut body = json!({
        "type_id": type_id,
        "name": format!("Type {}", type_id),
        "published": published,
        "group_id": 18,
    });

    if let Some(market_group_id) = market_group_id {
        body["market_group_id"] = json!(market_group_id);
    }

    body
}

/// Create one structure record of the structure feed.
pub fn structure(structure_id: i64, system_id: i64, region_id: i64) -> Value {
    json!({
        "typeId": 35834,
        "name": structure_name(structure_id),
        "regionId": region_id,
        "location": { "x": 10.0, "y": 20.0, "z": 30.0 },
        "typeName": "Keepstar",
        "systemId": system_id,
        "lastSeen": "2018-03-14T12:30:00Z",
        "systemName": solar_system_name(system_id),
        "public": true,
        "firstSeen": "2017-11-02T08:00:00Z",
        "regionName": region_name(region_id),
    })
}

/// Create a structure feed body keyed by decimal structure ID.
///
/// Every structure is placed in the default solar system and region.
pub fn structure_feed(structure_ids: &[i64]) -> Value {
    let mut feed = serde_json::Map::new();
    for structure_id in structure_ids {
        feed.insert(
            structure_id.to_string(),
            structure(*structure_id, SOLAR_SYSTEM_ID, REGION_ID),
        );
    }

    Value::Object(feed)
}

/// Create a cached region location.
pub fn region_location(region_id: i64) -> Value {
    json!({
        "region": { "id": region_id, "name": region_name(region_id) },
    })
}

/// Create a cached constellation location within the given region.
pub fn constellation_location(constellation_id: i64, region_id: i64) -> Value {
    json!({
        "region": { "id": region_id, "name": region_name(region_id) },
        "constellation": { "id": constellation_id, "name": constellation_name(constellation_id) },
    })
}

/// Create a cached solar system location with the default constellation and region.
pub fn solar_system_location(system_id: i64) -> Value {
    json!({
        "region": { "id": REGION_ID, "name": region_name(REGION_ID) },
        "constellation": { "id": CONSTELLATION_ID, "name": constellation_name(CONSTELLATION_ID) },
        "solarSystem": {
            "id": system_id,
            "name": solar_system_name(system_id),
            "securityStatus": SECURITY_STATUS,
        },
    })
}

/// Create a cached station location with the default ancestry chain.
pub fn station_location(station_id: i64) -> Value {
    let mut location = solar_system_location(SOLAR_SYSTEM_ID);
    location["station"] = json!({
        "id": station_id,
        "name": station_name(station_id),
        "position": { "x": 1.0, "y": 2.0, "z": 3.0 },
    });

    location
}
