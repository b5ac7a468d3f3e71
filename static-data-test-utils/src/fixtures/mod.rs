//! Test fixture modules for database and HTTP mock creation.
//!
//! - `cache` - cached location and market type rows
//! - `universe` - upstream response bodies and mock endpoints for the universe API and
//!   the structure feed

pub mod cache;
pub mod universe;
