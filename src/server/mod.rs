//! Server application core modules.
//!
//! HTTP routing, configuration, the cache store, upstream API clients, location and market
//! type services, and the background refresh scheduler.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod upstream;
pub mod util;
