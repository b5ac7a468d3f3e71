use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DatabaseConnection, EntityTrait, TransactionTrait};

use crate::{
    model::location::Location,
    server::{error::cache::CacheError, model::cache::CachedLocation},
};

pub struct LocationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LocationRepository<'a, C> {
    /// Rows per insert statement, keeping bind parameters well under SQLite's limit.
    const BATCH_SIZE: usize = 300;

    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get the cached entry for a location ID
    ///
    /// # Returns
    /// - `Ok(None)` - The ID has never been resolved
    /// - `Err(CacheError::Corrupt)` - The stored location could not be decoded
    pub async fn get(&self, id: i64) -> Result<Option<CachedLocation>, CacheError> {
        let model = entity::prelude::CachedLocation::find_by_id(id)
            .one(self.db)
            .await
            .map_err(|source| CacheError::ReadFailed {
                key: cache_key(id),
                source,
            })?;

        let Some(model) = model else {
            return Ok(None);
        };

        let location: Location =
            serde_json::from_str(&model.location).map_err(|source| CacheError::Corrupt {
                key: cache_key(id),
                source,
            })?;

        Ok(Some(CachedLocation {
            id: model.id,
            expires_at: model.expires_at,
            location,
        }))
    }

    /// Insert or replace a single entry
    pub async fn upsert(&self, entry: CachedLocation) -> Result<(), CacheError> {
        self.upsert_many(vec![entry]).await.map(|_| ())
    }

    /// Insert or replace many entries, returning how many were written
    ///
    /// Entries are written in batches; pass a transaction as the connection to commit them
    /// all at once.
    pub async fn upsert_many(&self, entries: Vec<CachedLocation>) -> Result<usize, CacheError> {
        if entries.is_empty() {
            return Ok(0);
        }

        let mut models = Vec::with_capacity(entries.len());
        for entry in entries {
            let location =
                serde_json::to_string(&entry.location).map_err(|source| CacheError::Corrupt {
                    key: cache_key(entry.id),
                    source,
                })?;

            models.push(entity::cached_location::ActiveModel {
                id: ActiveValue::Set(entry.id),
                expires_at: ActiveValue::Set(entry.expires_at),
                location: ActiveValue::Set(location),
            });
        }

        let written = models.len();

        for batch in models.chunks(Self::BATCH_SIZE) {
            entity::prelude::CachedLocation::insert_many(batch.to_vec())
                .on_conflict(
                    OnConflict::column(entity::cached_location::Column::Id)
                        .update_columns([
                            entity::cached_location::Column::ExpiresAt,
                            entity::cached_location::Column::Location,
                        ])
                        .to_owned(),
                )
                .exec(self.db)
                .await
                .map_err(|source| CacheError::WriteFailed {
                    key: format!("{} locations", batch.len()),
                    source,
                })?;
        }

        Ok(written)
    }
}

impl LocationRepository<'_, DatabaseConnection> {
    /// Insert or replace many entries within a single transaction
    ///
    /// Either every entry is written or none are.
    pub async fn upsert_batch(&self, entries: Vec<CachedLocation>) -> Result<usize, CacheError> {
        let write_failed = |source| CacheError::WriteFailed {
            key: "location batch".to_string(),
            source,
        };

        let txn = self.db.begin().await.map_err(write_failed)?;
        let written = LocationRepository::new(&txn).upsert_many(entries).await?;
        txn.commit().await.map_err(write_failed)?;

        Ok(written)
    }
}

fn cache_key(id: i64) -> String {
    format!("location {}", id)
}
