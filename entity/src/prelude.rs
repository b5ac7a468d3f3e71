pub use super::cached_location::Entity as CachedLocation;
pub use super::market_type_set::Entity as MarketTypeSet;
