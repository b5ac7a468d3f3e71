use serde::{Deserialize, Serialize};

use crate::{model::location::Coordinates, server::util::time::parse_feed_timestamp};

/// A structure as published by the third-party structure feed.
///
/// The feed is a JSON object keyed by the structure ID as a decimal string; the record
/// itself does not repeat its ID.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureRecord {
    pub name: String,
    pub type_id: i64,
    #[serde(default)]
    pub type_name: String,
    pub region_id: i64,
    #[serde(default)]
    pub region_name: String,
    pub system_id: i64,
    #[serde(default)]
    pub system_name: String,
    #[serde(rename = "location", default)]
    pub coordinates: Coordinates,
    #[serde(default)]
    pub first_seen: String,
    #[serde(default)]
    pub last_seen: String,
    #[serde(default)]
    pub public: bool,
}

impl StructureRecord {
    pub fn first_seen_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        parse_feed_timestamp(&self.first_seen)
    }

    pub fn last_seen_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        parse_feed_timestamp(&self.last_seen)
    }
}
