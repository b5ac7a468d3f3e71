//! Tests for RegionService::refresh_regions.

use super::*;

use crate::server::service::region::RegionService;

/// Tests refreshing every listed region.
///
/// Expected: Ok(2) with both regions cached
#[tokio::test]
async fn refreshes_all_regions() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_location_tables()
        .with_region_ids_endpoint(vec![10000001, 10000002], 1)
        .with_region_endpoint(10000001, 1)
        .with_region_endpoint(10000002, 1)
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let service = RegionService::new(&state.db, &state.esi_client);
    let result = service.refresh_regions().await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(result.unwrap(), 2);

    let entry = LocationRepository::new(&test.db).get(10000002).await;
    assert!(entry.is_ok(), "Error: {:?}", entry);
    let region = entry.unwrap().unwrap().location.region.unwrap();
    assert_eq!(region.name, factory::region_name(10000002));

    test.assert_mocks();

    Ok(())
}

/// Tests refreshing a region that is already cached under an old name.
///
/// Expected: Ok(1) with the entry replaced
#[tokio::test]
async fn replaces_existing_regions() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_location_tables()
        .with_cached_location(
            10000002,
            Utc::now().timestamp() - 3600,
            serde_json::json!({ "region": { "id": 10000002, "name": "Old Name" } }),
        )
        .with_region_ids_endpoint(vec![10000002], 1)
        .with_region_endpoint(10000002, 1)
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let service = RegionService::new(&state.db, &state.esi_client);
    let result = service.refresh_regions().await;

    assert!(result.is_ok(), "Error: {:?}", result);

    let entry = LocationRepository::new(&test.db)
        .get(10000002)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(entry.location.region.unwrap().name, factory::region_name(10000002));
    assert!(entry.expires_at > Utc::now().timestamp());
    assert_eq!(test.count_cached_locations().await?, 1);

    test.assert_mocks();

    Ok(())
}

/// Tests refreshing regions when one region detail fails.
///
/// Expected: Err with nothing written
#[tokio::test]
async fn aborts_on_first_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_location_tables()
        .with_region_ids_endpoint(vec![10000001, 10000002, 10000003], 1)
        .with_region_endpoint(10000001, 1)
        .with_error_endpoint("GET", "/universe/regions/10000002/", 500, 1)
        .with_region_endpoint(10000003, 0)
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let service = RegionService::new(&state.db, &state.esi_client);
    let result = service.refresh_regions().await;

    assert!(matches!(result, Err(Error::UpstreamError(_))));
    assert_eq!(test.count_cached_locations().await?, 0);

    test.assert_mocks();

    Ok(())
}
