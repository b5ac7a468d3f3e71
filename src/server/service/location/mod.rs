//! Location resolution with a persistent, expiring cache.
//!
//! [`LocationService::resolve`] turns one ID into a [`Location`] carrying the full ancestor
//! chain, reading the cache first and falling back to upstream per level. Expired entries
//! are served when upstream is unavailable. [`LocationService::resolve_many`] runs one
//! independent resolution task per distinct ID and gathers whatever succeeded.

pub mod classify;
pub mod level;

#[cfg(test)]
mod tests;

use std::{
    collections::{HashMap, HashSet},
    future::Future,
    pin::Pin,
};

use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio::sync::mpsc;

use crate::{
    model::location::Location,
    server::{
        config::ClassifierPolicy,
        data::location::LocationRepository,
        error::{location::LocationError, Error},
        model::cache::CachedLocation,
        upstream::esi::EsiClient,
        util::{eve::IdentifierClass, time},
    },
};

use self::level::Level;

type ResolveFuture<'a> = Pin<Box<dyn Future<Output = Result<Location, Error>> + Send + 'a>>;

/// Outcome of a batch resolution.
#[derive(Clone, Debug, Default)]
pub struct BatchResolution {
    /// Every ID that resolved, keyed by ID.
    pub locations: HashMap<i64, Location>,
    /// Number of distinct IDs requested.
    pub requested: usize,
}

impl BatchResolution {
    /// Number of distinct IDs that could not be resolved.
    pub fn failed(&self) -> usize {
        self.requested - self.locations.len()
    }

    /// The aggregate error of the batch, `None` if every ID resolved.
    pub fn error(&self) -> Option<LocationError> {
        match self.failed() {
            0 => None,
            failed => Some(LocationError::IncompleteBatch {
                failed,
                requested: self.requested,
            }),
        }
    }
}

#[derive(Clone)]
pub struct LocationService {
    db: DatabaseConnection,
    esi_client: EsiClient,
    classifier: ClassifierPolicy,
}

impl LocationService {
    pub fn new(
        db: &DatabaseConnection,
        esi_client: &EsiClient,
        classifier: ClassifierPolicy,
    ) -> Self {
        Self {
            db: db.clone(),
            esi_client: esi_client.clone(),
            classifier,
        }
    }

    /// Resolves a location ID into a location with its full ancestor chain.
    ///
    /// # Returns
    /// - `Ok(Location)` - Fresh cache hit, freshly fetched location, or an expired cached
    ///   location when upstream failed
    /// - `Err(Error::LocationError)` - The ID is outside every band, has an unsupported
    ///   category, or is a structure absent from the cache
    /// - `Err(Error::UpstreamError)` - Upstream failed and nothing was cached
    /// - `Err(Error::CacheError)` - The cache could not be read or written
    pub async fn resolve(&self, id: i64) -> Result<Location, Error> {
        self.resolve_as(id, None).await
    }

    /// Resolves many IDs concurrently.
    ///
    /// Duplicate IDs are resolved once. Every distinct ID runs as its own spawned task, so
    /// a failure never affects the others, and dropping the returned future does not
    /// cancel work already started; those tasks still complete and populate the cache.
    pub async fn resolve_many(&self, ids: &[i64]) -> BatchResolution {
        self.resolve_many_as(ids, None).await
    }

    /// Resolves many IDs whose class is already known, skipping classification.
    pub(crate) async fn resolve_many_as(
        &self,
        ids: &[i64],
        class: Option<IdentifierClass>,
    ) -> BatchResolution {
        let unique: HashSet<i64> = ids.iter().copied().collect();
        let requested = unique.len();

        let (tx, mut rx) = mpsc::channel(requested.max(1));

        for id in unique {
            let service = self.clone();
            let tx = tx.clone();

            tokio::spawn(async move {
                let result = service.resolve_as(id, class).await;
                // The receiver is gone if the caller stopped waiting; the entry is cached anyway
                let _ = tx.send((id, result)).await;
            });
        }
        drop(tx);

        let mut locations = HashMap::with_capacity(requested);
        while let Some((id, result)) = rx.recv().await {
            match result {
                Ok(location) => {
                    locations.insert(id, location);
                }
                Err(e) => tracing::warn!("Failed to resolve location ID {}: {}", id, e),
            }
        }

        tracing::debug!(
            "Resolved {} of {} location ID(s)",
            locations.len(),
            requested
        );

        BatchResolution {
            locations,
            requested,
        }
    }

    fn resolve_as(&self, id: i64, class: Option<IdentifierClass>) -> ResolveFuture<'_> {
        Box::pin(async move {
            let cached = LocationRepository::new(&self.db).get(id).await?;

            if let Some(entry) = &cached {
                if !entry.is_stale(Utc::now()) {
                    tracing::debug!("Cache hit for location ID {}", id);
                    return Ok(entry.location.clone());
                }
            }

            match self.refresh(id, class).await {
                Ok(location) => Ok(location),
                Err(e) if e.is_upstream() => match cached {
                    Some(entry) => {
                        tracing::warn!(
                            "Serving expired location ID {} after upstream failure: {}",
                            id,
                            e
                        );
                        Ok(entry.location)
                    }
                    None => Err(e),
                },
                Err(e) => Err(e),
            }
        })
    }

    /// Fetches one level from upstream, joins it to its resolved parent and caches it.
    async fn refresh(&self, id: i64, class: Option<IdentifierClass>) -> Result<Location, Error> {
        let class = match class {
            Some(class) => class,
            None => classify::classify(&self.esi_client, self.classifier, id).await?,
        };

        let Some(level) = Level::for_class(class) else {
            return Err(LocationError::UnknownStructure(id).into());
        };

        let fetched = level.fetch(&self.esi_client, id).await?;

        let mut location = match fetched.parent {
            Some((parent_id, parent_class)) => self.resolve_as(parent_id, Some(parent_class)).await?,
            None => Location::default(),
        };
        fetched.facet.splice(&mut location);

        if !location.has_complete_ancestry() {
            return Err(Error::InternalError(format!(
                "Location ID {} resolved without its full ancestor chain",
                id
            )));
        }

        LocationRepository::new(&self.db)
            .upsert(CachedLocation {
                id,
                expires_at: time::expires_at(class, Utc::now()),
                location: location.clone(),
            })
            .await?;

        tracing::debug!("Cached location ID {} as {:?}", id, class);

        Ok(location)
    }
}
