//! sea-orm entities for the static data cache.

pub mod prelude;

pub mod cached_location;
pub mod market_type_set;
