//! Data access layer repositories.
//!
//! Repositories wrap the two persisted namespaces: resolved location entries keyed by
//! location ID, and the market type set stored under a single key. Each repository is
//! generic over `ConnectionTrait`, so passing a transaction as the connection makes a batch
//! of writes atomic.

pub mod location;
pub mod market_type;

#[cfg(test)]
mod tests;
