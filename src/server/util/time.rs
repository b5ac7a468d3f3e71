//! Cache expiry calculations.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};

use crate::server::util::eve::{self, IdentifierClass};

/// Freshness of an individually resolved location, in hours.
pub const LOCATION_TTL_HOURS: i64 = 24;
/// Freshness of conquerable stations, whose ownership changes, in hours.
pub const CONQUERABLE_STATION_TTL_HOURS: i64 = 1;

/// TTL applied when an entry of the given class is written.
pub fn ttl_for(class: IdentifierClass) -> Duration {
    match class {
        IdentifierClass::ConquerableStation => Duration::hours(CONQUERABLE_STATION_TTL_HOURS),
        _ => Duration::hours(LOCATION_TTL_HOURS),
    }
}

/// Unix timestamp at which a freshly written entry of `class` expires.
pub fn expires_at(class: IdentifierClass, now: DateTime<Utc>) -> i64 {
    (now + ttl_for(class)).timestamp()
}

/// Determines whether a cached entry should be refetched.
///
/// An entry is stale only once its expiry has passed **and** its ID is in a band that is
/// refreshed on demand. Regions and structures are served as-is past their expiry since
/// the scheduler is their only refresh path.
pub fn is_stale(id: i64, expires_at: i64, now: DateTime<Utc>) -> bool {
    eve::is_individually_refreshed(id) && expires_at < now.timestamp()
}

/// Parses a timestamp from the structure feed.
///
/// The feed emits RFC 3339 timestamps; timestamps lacking an offset are taken as UTC.
/// Returns `None` for anything else.
pub fn parse_feed_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if value.is_empty() {
        return None;
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    /// Tests expiry differentiation between ordinary and conquerable stations.
    ///
    /// Expected: 24 hours for stations, 1 hour for conquerable stations
    #[test]
    fn conquerable_stations_expire_sooner() {
        let now = now();

        assert_eq!(
            expires_at(IdentifierClass::Station, now),
            now.timestamp() + 86_400
        );
        assert_eq!(
            expires_at(IdentifierClass::ConquerableStation, now),
            now.timestamp() + 3_600
        );
        assert_eq!(
            expires_at(IdentifierClass::SolarSystem, now),
            now.timestamp() + 86_400
        );
    }

    /// Tests staleness of expired entries per band.
    ///
    /// Expected: expired stations are stale, expired regions and structures are not
    #[test]
    fn staleness_depends_on_band() {
        let now = now();
        let past = now.timestamp() - 1;
        let future = now.timestamp() + 60;

        assert!(is_stale(60_003_760, past, now));
        assert!(!is_stale(60_003_760, future, now));
        assert!(is_stale(20_000_020, past, now));
        assert!(!is_stale(10_000_002, past, now));
        assert!(!is_stale(1_035_466_617_946, past, now));
    }

    /// Tests parsing of feed timestamps with and without an offset.
    ///
    /// Expected: both parse to the same instant, garbage yields None
    #[test]
    fn parses_feed_timestamps() {
        let with_offset = parse_feed_timestamp("2018-03-14T12:30:00Z").unwrap();
        let without_offset = parse_feed_timestamp("2018-03-14T12:30:00").unwrap();

        assert_eq!(with_offset, without_offset);
        assert!(parse_feed_timestamp("yesterday").is_none());
        assert!(parse_feed_timestamp("").is_none());
    }
}
