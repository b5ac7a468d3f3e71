//! Service layer for business logic.
//!
//! Services coordinate the cache repositories and the upstream clients:
//! - `location` - per-request location resolution and batch fan-out
//! - `structure` / `region` - bulk refreshes run by the scheduler
//! - `market_type` - market type classification and lookup
//! - `retry` - retry with exponential backoff for transient failures

pub mod location;
pub mod market_type;
pub mod region;
pub mod retry;
pub mod structure;

#[cfg(test)]
mod tests;
