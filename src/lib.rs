//! Caching resolver for EVE Online locations and market types.
//!
//! Resolves station, solar system, constellation, region and structure identifiers into
//! fully populated locations, persisting every result so repeated batches are served from
//! the local cache. Background jobs keep structures, regions and market types fresh
//! independently of client requests.

pub mod model;
pub mod server;
