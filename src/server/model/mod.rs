//! Server-side models shared between services, upstream clients and the scheduler.

pub mod app;
pub mod cache;
pub mod esi;
pub mod structure;
