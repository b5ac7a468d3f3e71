//! Identifiers shared by fixtures and tests.
//!
//! The IDs form one consistent ancestry chain (The Forge > Kimotoro > Jita > Jita IV -
//! Moon 4) so factories can build complete locations without extra arguments.

/// User agent for clients built against the mock server.
pub static TEST_USER_AGENT: &str = "static-data-tests/1.0 (contact@example.com)";

pub const REGION_ID: i64 = 10000002;
pub const CONSTELLATION_ID: i64 = 20000020;
pub const SOLAR_SYSTEM_ID: i64 = 30000142;
pub const STATION_ID: i64 = 60003760;
/// A station in the conquerable sub-band.
pub const CONQUERABLE_STATION_ID: i64 = 61000182;
pub const STRUCTURE_ID: i64 = 1022734985679;
