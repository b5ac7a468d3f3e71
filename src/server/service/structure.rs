use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::location::Station,
    server::{
        config::ClassifierPolicy,
        data::location::LocationRepository,
        error::Error,
        model::{cache::CachedLocation, structure::StructureRecord},
        service::location::LocationService,
        upstream::{esi::EsiClient, structure::StructureFeedClient},
        util::{
            eve::{IdentifierClass, STRUCTURE_ID_FLOOR},
            time,
        },
    },
};

pub struct StructureService<'a> {
    db: &'a DatabaseConnection,
    esi_client: &'a EsiClient,
    structure_client: &'a StructureFeedClient,
}

impl<'a> StructureService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        esi_client: &'a EsiClient,
        structure_client: &'a StructureFeedClient,
    ) -> Self {
        Self {
            db,
            esi_client,
            structure_client,
        }
    }

    /// Imports every structure from the structure feed into the location cache.
    ///
    /// The solar systems the structures reference are resolved through the location cache
    /// first. If any of them cannot be resolved the cycle is abandoned without writing, so
    /// the previously imported structures stay in place until the next cycle.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of structures written
    /// - `Err(Error)` - Feed fetch, solar system resolution or the batched write failed
    pub async fn refresh_structures(&self) -> Result<usize, Error> {
        let feed = self.structure_client.get_all_structures().await?;

        let mut structures: Vec<(i64, StructureRecord)> = Vec::with_capacity(feed.len());
        for (key, record) in feed {
            match key.parse::<i64>() {
                Ok(structure_id) if structure_id > STRUCTURE_ID_FLOOR => {
                    structures.push((structure_id, record))
                }
                _ => tracing::warn!("Skipping structure with invalid ID {:?}", key),
            }
        }

        let system_ids: Vec<i64> = structures.iter().map(|(_, s)| s.system_id).collect();

        // Solar systems are refreshed on demand, so their class is known up front
        let location_service =
            LocationService::new(self.db, self.esi_client, ClassifierPolicy::Range);
        let systems = location_service
            .resolve_many_as(&system_ids, Some(IdentifierClass::SolarSystem))
            .await;

        if let Some(e) = systems.error() {
            return Err(e.into());
        }

        let expires_at = time::expires_at(IdentifierClass::Structure, Utc::now());

        let mut entries = Vec::with_capacity(structures.len());
        for (structure_id, record) in structures {
            let Some(system_location) = systems.locations.get(&record.system_id) else {
                continue;
            };

            let mut location = system_location.clone();
            location.station = Some(Station {
                id: structure_id,
                first_seen: record.first_seen_at(),
                last_seen: record.last_seen_at(),
                name: record.name,
                coordinates: record.coordinates,
                type_id: Some(record.type_id),
                type_name: Some(record.type_name).filter(|name| !name.is_empty()),
                public: Some(record.public),
            });

            entries.push(CachedLocation {
                id: structure_id,
                expires_at,
                location,
            });
        }

        let written = LocationRepository::new(self.db)
            .upsert_batch(entries)
            .await?;

        Ok(written)
    }
}
