use chrono::{DateTime, Utc};

use crate::{model::location::Location, server::util::time};

/// A resolved location together with the time after which it may be refetched.
///
/// Entries are only ever replaced as a whole; expiry gates refetching, never retention.
#[derive(Clone, Debug, PartialEq)]
pub struct CachedLocation {
    pub id: i64,
    /// Unix timestamp (seconds).
    pub expires_at: i64,
    pub location: Location,
}

impl CachedLocation {
    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        time::is_stale(self.id, self.expires_at, now)
    }
}
