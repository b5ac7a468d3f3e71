//! Market type classification.
//!
//! The full item type catalog is paged through and every type's detail record checked for
//! whether it can be traded on the market. The resulting set replaces the stored one in a
//! single write.

use std::time::Duration;

use futures::stream::{FuturesUnordered, StreamExt};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::market_type::MarketTypeRepository,
    error::{market::MarketTypeError, Error},
    service::retry::RetryContext,
    upstream::esi::EsiClient,
};

pub struct MarketTypeService<'a> {
    db: &'a DatabaseConnection,
    esi_client: &'a EsiClient,
    retry_backoff: Duration,
}

impl<'a> MarketTypeService<'a> {
    pub fn new(db: &'a DatabaseConnection, esi_client: &'a EsiClient) -> Self {
        Self {
            db,
            esi_client,
            retry_backoff: RetryContext::DEFAULT_INITIAL_BACKOFF,
        }
    }

    /// Overrides the initial backoff between retries of a single upstream call.
    pub fn with_retry_backoff(mut self, retry_backoff: Duration) -> Self {
        self.retry_backoff = retry_backoff;
        self
    }

    /// Get the stored market type IDs
    ///
    /// # Returns
    /// - `Ok(Vec<i64>)` - IDs from the most recent completed refresh
    /// - `Err(Error::MarketTypeError(NotFound))` - No refresh has completed yet
    pub async fn get_market_types(&self) -> Result<Vec<i64>, Error> {
        MarketTypeRepository::new(self.db)
            .get()
            .await?
            .ok_or_else(|| MarketTypeError::NotFound.into())
    }

    /// Reclassifies the whole type catalog and replaces the stored market type set.
    ///
    /// Types whose classification still fails after retrying are left out of the set until
    /// the next refresh. Failing to page through the catalog abandons the refresh.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of market types stored
    /// - `Err(Error)` - A catalog page could not be fetched or the write failed
    pub async fn refresh_market_types(&self) -> Result<usize, Error> {
        let type_ids = self.fetch_type_ids().await?;
        let total = type_ids.len();

        let mut checks: FuturesUnordered<_> = type_ids
            .into_iter()
            .map(|type_id| async move { (type_id, self.check_market_type(type_id).await) })
            .collect();

        let mut market_types = Vec::new();
        let mut failed = 0;
        while let Some((type_id, result)) = checks.next().await {
            match result {
                Ok(true) => market_types.push(type_id),
                Ok(false) => (),
                Err(e) => {
                    failed += 1;
                    tracing::warn!("Excluding type ID {} from market types: {}", type_id, e);
                }
            }
        }

        market_types.sort_unstable();

        MarketTypeRepository::new(self.db)
            .replace(&market_types)
            .await?;

        if failed > 0 {
            tracing::warn!(
                "Could not classify {} of {} type(s) this cycle",
                failed,
                total
            );
        }

        Ok(market_types.len())
    }

    /// Pages through the type catalog until an empty page is returned.
    async fn fetch_type_ids(&self) -> Result<Vec<i64>, Error> {
        let mut type_ids = Vec::new();
        let mut page = 1;

        loop {
            let description = format!("type catalog page {}", page);
            let mut ctx = RetryContext::new().with_backoff(self.retry_backoff);

            let page_ids = ctx
                .execute_with_retry(&description, || {
                    let esi_client = self.esi_client.clone();

                    Box::pin(async move { Ok(esi_client.get_type_ids_page(page).await?) })
                })
                .await?;

            if page_ids.is_empty() {
                break;
            }

            type_ids.extend(page_ids);
            page += 1;
        }

        Ok(type_ids)
    }

    async fn check_market_type(&self, type_id: i64) -> Result<bool, Error> {
        let description = format!("market check for type ID {}", type_id);
        // Any failed check is retried, whatever the upstream status or body
        let mut ctx = RetryContext::new()
            .with_backoff(self.retry_backoff)
            .retry_upstream_errors();

        ctx.execute_with_retry(&description, || {
            let esi_client = self.esi_client.clone();

            Box::pin(async move { Ok(esi_client.get_type(type_id).await?.is_market_type()) })
        })
        .await
    }
}
