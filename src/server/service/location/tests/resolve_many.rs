//! Tests for LocationService::resolve_many.
//!
//! This module verifies deduplication and partial-success aggregation of batch resolution.

use super::*;

use static_data_test_utils::constant::{SOLAR_SYSTEM_ID, STATION_ID};

/// Tests resolving a batch containing duplicate IDs.
///
/// Verifies that each distinct ID is resolved once.
///
/// Expected: Two locations, no error, one upstream call per distinct ID
#[tokio::test]
async fn deduplicates_ids() -> Result<(), TestError> {
    let other_station_id = STATION_ID + 1;
    let test = TestBuilder::new()
        .with_location_tables()
        .with_cached_location(
            SOLAR_SYSTEM_ID,
            fresh(),
            factory::solar_system_location(SOLAR_SYSTEM_ID),
        )
        .with_names_endpoint(STATION_ID, "station", 1)
        .with_names_endpoint(other_station_id, "station", 1)
        .with_station_endpoint(STATION_ID, SOLAR_SYSTEM_ID, 1)
        .with_station_endpoint(other_station_id, SOLAR_SYSTEM_ID, 1)
        .build()
        .await?;

    let service = location_service(&test, ClassifierPolicy::Query);
    let batch = service
        .resolve_many(&[STATION_ID, STATION_ID, STATION_ID, other_station_id])
        .await;

    assert_eq!(batch.requested, 2);
    assert_eq!(batch.locations.len(), 2);
    assert!(batch.locations.contains_key(&STATION_ID));
    assert!(batch.locations.contains_key(&other_station_id));
    assert!(batch.error().is_none());

    test.assert_mocks();

    Ok(())
}

/// Tests resolving a batch in which one ID is outside every band.
///
/// Expected: The two valid locations plus an IncompleteBatch error
#[tokio::test]
async fn returns_partial_result_with_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_location_tables()
        .with_cached_location(
            SOLAR_SYSTEM_ID,
            fresh(),
            factory::solar_system_location(SOLAR_SYSTEM_ID),
        )
        .with_cached_location(STATION_ID, fresh(), factory::station_location(STATION_ID))
        .build()
        .await?;

    let service = location_service(&test, ClassifierPolicy::Query);
    let batch = service
        .resolve_many(&[STATION_ID, SOLAR_SYSTEM_ID, 50_000_000])
        .await;

    assert_eq!(batch.locations.len(), 2);
    assert_eq!(batch.failed(), 1);
    assert!(matches!(
        batch.error(),
        Some(LocationError::IncompleteBatch {
            failed: 1,
            requested: 3
        })
    ));

    Ok(())
}

/// Tests resolving an empty batch.
///
/// Expected: No locations and no error
#[tokio::test]
async fn empty_batch_resolves_nothing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_location_tables().build().await?;

    let service = location_service(&test, ClassifierPolicy::Query);
    let batch = service.resolve_many(&[]).await;

    assert_eq!(batch.requested, 0);
    assert!(batch.locations.is_empty());
    assert!(batch.error().is_none());

    Ok(())
}
