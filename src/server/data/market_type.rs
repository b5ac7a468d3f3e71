use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, EntityTrait};

use crate::server::error::cache::CacheError;

/// The single key the market type set is stored under.
pub const MARKET_TYPES_KEY: &str = "ids";

pub struct MarketTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MarketTypeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get the stored market type IDs, `None` if no refresh has completed yet
    pub async fn get(&self) -> Result<Option<Vec<i64>>, CacheError> {
        let model = entity::prelude::MarketTypeSet::find_by_id(MARKET_TYPES_KEY.to_string())
            .one(self.db)
            .await
            .map_err(|source| CacheError::ReadFailed {
                key: cache_key(),
                source,
            })?;

        let Some(model) = model else {
            return Ok(None);
        };

        let type_ids =
            serde_json::from_str(&model.type_ids).map_err(|source| CacheError::Corrupt {
                key: cache_key(),
                source,
            })?;

        Ok(Some(type_ids))
    }

    /// Replace the stored market type IDs in a single write
    pub async fn replace(&self, type_ids: &[i64]) -> Result<(), CacheError> {
        let encoded = serde_json::to_string(type_ids).map_err(|source| CacheError::Corrupt {
            key: cache_key(),
            source,
        })?;

        let model = entity::market_type_set::ActiveModel {
            key: ActiveValue::Set(MARKET_TYPES_KEY.to_string()),
            type_ids: ActiveValue::Set(encoded),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        entity::prelude::MarketTypeSet::insert(model)
            .on_conflict(
                OnConflict::column(entity::market_type_set::Column::Key)
                    .update_columns([
                        entity::market_type_set::Column::TypeIds,
                        entity::market_type_set::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec(self.db)
            .await
            .map_err(|source| CacheError::WriteFailed {
                key: cache_key(),
                source,
            })?;

        Ok(())
    }
}

fn cache_key() -> String {
    format!("market types {}", MARKET_TYPES_KEY)
}
