//! EVE Online location identifier bands.
//!
//! Location IDs share a single numeric namespace in which each kind of location owns a
//! contiguous band. The bands decide how an ID is fetched, how long a fetched entry stays
//! fresh, and whether a cached entry may be refreshed on demand at all.
//!
//! # Band Table
//! | Band | Kind |
//! |---|---|
//! | `10,000,000 - 19,999,999` | Regions |
//! | `20,000,000 - 29,999,999` | Constellations |
//! | `30,000,000 - 39,999,999` | Solar systems (including wormhole and abyssal systems) |
//! | `40,000,000 - 59,999,999` | Reserved (celestials, never resolvable) |
//! | `60,000,000 - 61,000,000` | Stations |
//! | `61,000,001 - 64,000,000` | Conquerable (outpost) stations |
//! | `> 1,000,000,000,000` | Player-built structures |
//!
//! Every other ID is outside all known bands.

use crate::server::error::location::LocationError;

pub const REGION_ID_MIN: i64 = 10_000_000;
pub const CONSTELLATION_ID_MIN: i64 = 20_000_000;
pub const SOLAR_SYSTEM_ID_MIN: i64 = 30_000_000;
pub const RESERVED_ID_MIN: i64 = 40_000_000;
pub const STATION_ID_MIN: i64 = 60_000_000;
pub const CONQUERABLE_STATION_ID_MIN: i64 = 61_000_001;
pub const STATION_ID_MAX: i64 = 64_000_000;
/// Structure IDs are strictly greater than this value.
pub const STRUCTURE_ID_FLOOR: i64 = 1_000_000_000_000;

/// The kind of location an identifier refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IdentifierClass {
    Region,
    Constellation,
    SolarSystem,
    Station,
    ConquerableStation,
    Structure,
}

impl IdentifierClass {
    /// Classifies an ID from its numeric band alone.
    ///
    /// Makes no network call. IDs outside every band (including the reserved celestial
    /// band) fail with `InvalidIdentifierRange`.
    ///
    /// # Example
    /// ```ignore
    /// assert_eq!(IdentifierClass::from_range(60003760)?, IdentifierClass::Station);
    /// assert!(IdentifierClass::from_range(50_000_000).is_err());
    /// ```
    pub fn from_range(id: i64) -> Result<Self, LocationError> {
        let class = match id {
            REGION_ID_MIN..CONSTELLATION_ID_MIN => Self::Region,
            CONSTELLATION_ID_MIN..SOLAR_SYSTEM_ID_MIN => Self::Constellation,
            SOLAR_SYSTEM_ID_MIN..RESERVED_ID_MIN => Self::SolarSystem,
            STATION_ID_MIN..CONQUERABLE_STATION_ID_MIN => Self::Station,
            CONQUERABLE_STATION_ID_MIN..=STATION_ID_MAX => Self::ConquerableStation,
            id if id > STRUCTURE_ID_FLOOR => Self::Structure,
            _ => return Err(LocationError::InvalidIdentifierRange(id)),
        };

        Ok(class)
    }

    /// Maps an upstream name-lookup category onto a class.
    ///
    /// The category is authoritative for the kind of location; the numeric band still
    /// decides whether a station is conquerable since the category does not distinguish
    /// the two.
    pub fn from_category(id: i64, category: &str) -> Result<Self, LocationError> {
        let class = match category {
            "region" => Self::Region,
            "constellation" => Self::Constellation,
            "solar_system" => Self::SolarSystem,
            "station" if id >= CONQUERABLE_STATION_ID_MIN && id <= STATION_ID_MAX => {
                Self::ConquerableStation
            }
            "station" => Self::Station,
            other => {
                return Err(LocationError::UnknownCategory {
                    id,
                    category: other.to_string(),
                })
            }
        };

        Ok(class)
    }

    /// Whether cached entries of this class may be refetched on demand once expired.
    ///
    /// Regions and structures are only written by bulk refresh jobs, so their cached
    /// entries are served regardless of expiry.
    pub fn is_individually_refreshed(self) -> bool {
        matches!(
            self,
            Self::Constellation | Self::SolarSystem | Self::Station | Self::ConquerableStation
        )
    }
}

/// Whether the ID lies in a band that is refreshed on demand once its entry expires.
///
/// IDs outside every band never reach the cache, so they report `false`.
pub fn is_individually_refreshed(id: i64) -> bool {
    IdentifierClass::from_range(id)
        .map(IdentifierClass::is_individually_refreshed)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests range classification at each band boundary.
    ///
    /// Expected: each boundary ID maps onto its band's class
    #[test]
    fn classifies_band_boundaries() {
        let cases = [
            (10_000_000, IdentifierClass::Region),
            (19_999_999, IdentifierClass::Region),
            (20_000_000, IdentifierClass::Constellation),
            (30_000_142, IdentifierClass::SolarSystem),
            (39_999_999, IdentifierClass::SolarSystem),
            (60_003_760, IdentifierClass::Station),
            (61_000_000, IdentifierClass::Station),
            (61_000_001, IdentifierClass::ConquerableStation),
            (64_000_000, IdentifierClass::ConquerableStation),
            (1_000_000_000_001, IdentifierClass::Structure),
        ];

        for (id, expected) in cases {
            assert_eq!(IdentifierClass::from_range(id).unwrap(), expected, "id {}", id);
        }
    }

    /// Tests rejection of IDs outside every band.
    ///
    /// Expected: Err(InvalidIdentifierRange) for each ID
    #[test]
    fn rejects_ids_outside_bands() {
        for id in [
            -1,
            0,
            9_999_999,
            40_000_000,
            59_999_999,
            64_000_001,
            1_000_000_000_000,
        ] {
            assert!(
                matches!(
                    IdentifierClass::from_range(id),
                    Err(LocationError::InvalidIdentifierRange(rejected)) if rejected == id
                ),
                "id {}",
                id
            );
        }
    }

    /// Tests mapping of name-lookup categories.
    ///
    /// Expected: known categories map, stations above 61M are conquerable, others fail
    #[test]
    fn maps_categories() {
        assert_eq!(
            IdentifierClass::from_category(30_000_142, "solar_system").unwrap(),
            IdentifierClass::SolarSystem
        );
        assert_eq!(
            IdentifierClass::from_category(60_003_760, "station").unwrap(),
            IdentifierClass::Station
        );
        assert_eq!(
            IdentifierClass::from_category(61_000_500, "station").unwrap(),
            IdentifierClass::ConquerableStation
        );
        assert!(matches!(
            IdentifierClass::from_category(60_003_760, "inventory_type"),
            Err(LocationError::UnknownCategory { .. })
        ));
        assert!(matches!(
            IdentifierClass::from_category(60_003_760, ""),
            Err(LocationError::UnknownCategory { .. })
        ));
    }

    /// Tests which bands are refreshed on demand.
    ///
    /// Expected: regions and structures are not, everything else resolvable is
    #[test]
    fn bulk_refreshed_bands_are_never_individually_refreshed() {
        assert!(!is_individually_refreshed(10_000_002));
        assert!(!is_individually_refreshed(1_035_466_617_946));
        assert!(!is_individually_refreshed(50_000_000));
        assert!(is_individually_refreshed(20_000_020));
        assert!(is_individually_refreshed(30_000_142));
        assert!(is_individually_refreshed(60_003_760));
        assert!(is_individually_refreshed(61_000_500));
    }
}
