//! Data transfer objects shared by the HTTP API and the cache.

pub mod api;
pub mod location;
pub mod market;
