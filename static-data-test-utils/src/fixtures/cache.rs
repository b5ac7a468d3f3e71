//! Cached location and market type insertion utilities.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};
use serde_json::Value;

use crate::{error::TestError, TestContext};

impl TestContext {
    /// Insert a cached location entry.
    ///
    /// # Arguments
    /// - `id` - Location ID the entry is keyed by
    /// - `expires_at` - Unix timestamp after which the entry is expired
    /// - `location` - Location JSON, typically from one of the `factory::*_location` functions
    pub async fn insert_cached_location(
        &self,
        id: i64,
        expires_at: i64,
        location: &Value,
    ) -> Result<entity::cached_location::Model, TestError> {
        let model = entity::cached_location::ActiveModel {
            id: ActiveValue::Set(id),
            expires_at: ActiveValue::Set(expires_at),
            location: ActiveValue::Set(serde_json::to_string(location)?),
        };

        Ok(entity::prelude::CachedLocation::insert(model)
            .exec_with_returning(&self.db)
            .await?)
    }

    /// Get the raw cached location row for an ID.
    pub async fn find_cached_location(
        &self,
        id: i64,
    ) -> Result<Option<entity::cached_location::Model>, TestError> {
        Ok(entity::prelude::CachedLocation::find_by_id(id)
            .one(&self.db)
            .await?)
    }

    /// Count cached location rows.
    pub async fn count_cached_locations(&self) -> Result<usize, TestError> {
        Ok(entity::prelude::CachedLocation::find()
            .all(&self.db)
            .await?
            .len())
    }

    /// Insert the market type set.
    pub async fn insert_market_types(
        &self,
        type_ids: &[i64],
    ) -> Result<entity::market_type_set::Model, TestError> {
        let model = entity::market_type_set::ActiveModel {
            key: ActiveValue::Set("ids".to_string()),
            type_ids: ActiveValue::Set(serde_json::to_string(type_ids)?),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        Ok(entity::prelude::MarketTypeSet::insert(model)
            .exec_with_returning(&self.db)
            .await?)
    }
}
