//! Per-level fetch and splice dispatch for the location hierarchy.
//!
//! Each level knows its upstream endpoint, the level of its parent and how to write its
//! own facet into a parent's resolved location. Resolution walks this table upwards from
//! the requested level until it reaches a cached ancestor or the region.

use crate::{
    model::location::{Constellation, Coordinates, Location, Region, SolarSystem, Station},
    server::{
        error::upstream::UpstreamError, upstream::esi::EsiClient, util::eve::IdentifierClass,
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Region,
    Constellation,
    SolarSystem,
    Station,
}

/// One level fetched from upstream, not yet joined to its ancestors.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchedLevel {
    /// The parent ID and the class it is resolved as, `None` for regions.
    pub parent: Option<(i64, IdentifierClass)>,
    pub facet: Facet,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Facet {
    Region(Region),
    Constellation(Constellation),
    SolarSystem(SolarSystem),
    Station(Station),
}

impl Level {
    /// The level an ID of the given class is fetched at; structures have none.
    pub fn for_class(class: IdentifierClass) -> Option<Self> {
        match class {
            IdentifierClass::Region => Some(Self::Region),
            IdentifierClass::Constellation => Some(Self::Constellation),
            IdentifierClass::SolarSystem => Some(Self::SolarSystem),
            IdentifierClass::Station | IdentifierClass::ConquerableStation => Some(Self::Station),
            IdentifierClass::Structure => None,
        }
    }

    pub async fn fetch(self, esi_client: &EsiClient, id: i64) -> Result<FetchedLevel, UpstreamError> {
        let fetched = match self {
            Self::Region => {
                let region = esi_client.get_region(id).await?;

                FetchedLevel {
                    parent: None,
                    facet: Facet::Region(Region {
                        id: region.region_id,
                        name: region.name,
                    }),
                }
            }
            Self::Constellation => {
                let constellation = esi_client.get_constellation(id).await?;

                FetchedLevel {
                    parent: Some((constellation.region_id, IdentifierClass::Region)),
                    facet: Facet::Constellation(Constellation {
                        id: constellation.constellation_id,
                        name: constellation.name,
                    }),
                }
            }
            Self::SolarSystem => {
                let system = esi_client.get_solar_system(id).await?;

                FetchedLevel {
                    parent: Some((system.constellation_id, IdentifierClass::Constellation)),
                    facet: Facet::SolarSystem(SolarSystem {
                        id: system.system_id,
                        name: system.name,
                        security_status: system.security_status,
                    }),
                }
            }
            Self::Station => {
                let station = esi_client.get_station(id).await?;

                FetchedLevel {
                    parent: Some((station.system_id, IdentifierClass::SolarSystem)),
                    facet: Facet::Station(Station {
                        id: station.station_id,
                        name: station.name,
                        coordinates: Coordinates {
                            x: station.position.x,
                            y: station.position.y,
                            z: station.position.z,
                        },
                        type_id: station.type_id,
                        type_name: None,
                        first_seen: None,
                        last_seen: None,
                        // NPC stations are always dockable
                        public: Some(true),
                    }),
                }
            }
        };

        Ok(fetched)
    }
}

impl Facet {
    /// Writes this facet into its parent's resolved location.
    pub fn splice(self, location: &mut Location) {
        match self {
            Self::Region(region) => location.region = Some(region),
            Self::Constellation(constellation) => location.constellation = Some(constellation),
            Self::SolarSystem(system) => location.solar_system = Some(system),
            Self::Station(station) => location.station = Some(station),
        }
    }
}
