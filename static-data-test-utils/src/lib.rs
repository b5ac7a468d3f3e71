//! Test utilities for the static data service.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares tables, cached entries and
//! mock upstream endpoints, and `build()` turns that declaration into a [`TestContext`]
//! holding an in-memory SQLite database and a mockito server standing in for both the
//! universe API and the structure feed.
//!
//! This crate does not depend on the service crate; upstream bodies are produced as
//! `serde_json::Value` and the service's state is built through
//! [`TestContext::to_app_state`].

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant, fixtures::universe::factory, test_setup_with_location_tables,
        test_setup_with_tables, TestBuilder, TestContext, TestError,
    };
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestBuilder::new().build().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        $crate::TestBuilder::new()
            $(.with_table($entity))+
            .build()
            .await
    }};
}

#[macro_export]
macro_rules! test_setup_with_location_tables {
    () => {{
        $crate::TestBuilder::new().with_location_tables().build().await
    }};
}
