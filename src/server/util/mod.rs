//! Utility functions shared by services and the scheduler.
//!
//! EVE Online identifier bands and location classes, and cache expiry calculations.

pub mod eve;
pub mod time;
