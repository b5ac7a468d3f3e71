use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::location::{Location, Region},
    server::{
        data::location::LocationRepository,
        error::Error,
        model::cache::CachedLocation,
        upstream::esi::EsiClient,
        util::{eve::IdentifierClass, time},
    },
};

pub struct RegionService<'a> {
    db: &'a DatabaseConnection,
    esi_client: &'a EsiClient,
}

impl<'a> RegionService<'a> {
    pub fn new(db: &'a DatabaseConnection, esi_client: &'a EsiClient) -> Self {
        Self { db, esi_client }
    }

    /// Refreshes every region in the location cache.
    ///
    /// Region details are fetched one after another; the first failure abandons the cycle
    /// without writing anything.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of regions written
    /// - `Err(Error)` - A fetch or the batched write failed
    pub async fn refresh_regions(&self) -> Result<usize, Error> {
        let region_ids = self.esi_client.get_region_ids().await?;

        let mut entries = Vec::with_capacity(region_ids.len());
        for region_id in region_ids {
            let region = self.esi_client.get_region(region_id).await?;

            entries.push(CachedLocation {
                id: region.region_id,
                expires_at: time::expires_at(IdentifierClass::Region, Utc::now()),
                location: Location {
                    region: Some(Region {
                        id: region.region_id,
                        name: region.name,
                    }),
                    ..Default::default()
                },
            });
        }

        let written = LocationRepository::new(self.db)
            .upsert_batch(entries)
            .await?;

        Ok(written)
    }
}
