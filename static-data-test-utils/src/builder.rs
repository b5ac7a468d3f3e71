//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before
//! execution. Methods can be chained, with all operations queued and executed during the
//! final `build()` call.

use mockito::{Mock, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};
use serde_json::Value;

use crate::{error::TestError, TestContext};

type MockBuilder = Box<dyn FnOnce(&mut TestContext) -> Mock>;

/// Builder for declarative test initialization.
///
/// Mock endpoints are created in the order they were declared. Mockito answers a request
/// with the first matching mock that is still missing hits, so declaring an error endpoint
/// before a success endpoint for the same path scripts an "error then success" sequence.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_location_tables: bool,

    // Database fixtures to insert
    cached_locations: Vec<(i64, i64, Value)>, // (id, expires_at, location)
    market_types: Option<Vec<i64>>,

    // Mock endpoints to create
    mock_builders: Vec<MockBuilder>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables, fixtures, or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_location_tables: false,
            cached_locations: Vec::new(),
            market_types: None,
            mock_builders: Vec::new(),
        }
    }

    /// Add both cache tables (`cached_location` and `market_type_set`).
    pub fn with_location_tables(mut self) -> Self {
        self.include_location_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use static_data_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), static_data_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(CachedLocation)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a cached location entry during `build()`.
    ///
    /// Requires the `cached_location` table.
    pub fn with_cached_location(mut self, id: i64, expires_at: i64, location: Value) -> Self {
        self.cached_locations.push((id, expires_at, location));
        self
    }

    /// Insert the market type set during `build()`.
    ///
    /// Requires the `market_type_set` table.
    pub fn with_market_types(mut self, type_ids: Vec<i64>) -> Self {
        self.market_types = Some(type_ids);
        self
    }

    /// Add a custom mock endpoint.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut ServerGuard) -> Mock + 'static,
    {
        self.mock_builders
            .push(Box::new(move |context| setup(&mut context.server)));
        self
    }

    pub fn with_station_endpoint(
        mut self,
        station_id: i64,
        system_id: i64,
        expected_requests: usize,
    ) -> Self {
        self.mock_builders.push(Box::new(move |context| {
            context
                .universe()
                .create_station_endpoint(station_id, system_id, expected_requests)
        }));
        self
    }

    pub fn with_solar_system_endpoint(
        mut self,
        system_id: i64,
        constellation_id: i64,
        expected_requests: usize,
    ) -> Self {
        self.mock_builders.push(Box::new(move |context| {
            context.universe().create_solar_system_endpoint(
                system_id,
                constellation_id,
                expected_requests,
            )
        }));
        self
    }

    pub fn with_constellation_endpoint(
        mut self,
        constellation_id: i64,
        region_id: i64,
        expected_requests: usize,
    ) -> Self {
        self.mock_builders.push(Box::new(move |context| {
            context.universe().create_constellation_endpoint(
                constellation_id,
                region_id,
                expected_requests,
            )
        }));
        self
    }

    pub fn with_region_endpoint(mut self, region_id: i64, expected_requests: usize) -> Self {
        self.mock_builders.push(Box::new(move |context| {
            context
                .universe()
                .create_region_endpoint(region_id, expected_requests)
        }));
        self
    }

    pub fn with_region_ids_endpoint(
        mut self,
        region_ids: Vec<i64>,
        expected_requests: usize,
    ) -> Self {
        self.mock_builders.push(Box::new(move |context| {
            context
                .universe()
                .create_region_ids_endpoint(&region_ids, expected_requests)
        }));
        self
    }

    /// Add a names lookup endpoint answering `category` for `id`.
    pub fn with_names_endpoint(
        mut self,
        id: i64,
        category: &'static str,
        expected_requests: usize,
    ) -> Self {
        self.mock_builders.push(Box::new(move |context| {
            context
                .universe()
                .create_names_endpoint(id, category, expected_requests)
        }));
        self
    }

    /// Add the complete chain of endpoints for a station in the default ancestry.
    ///
    /// Registers the names lookup, station, solar system, constellation and region
    /// endpoints, each expected `expected_requests` times.
    pub fn with_station_chain_endpoints(self, station_id: i64, expected_requests: usize) -> Self {
        use crate::constant::{CONSTELLATION_ID, REGION_ID, SOLAR_SYSTEM_ID};

        self.with_names_endpoint(station_id, "station", expected_requests)
            .with_station_endpoint(station_id, SOLAR_SYSTEM_ID, expected_requests)
            .with_solar_system_endpoint(SOLAR_SYSTEM_ID, CONSTELLATION_ID, expected_requests)
            .with_constellation_endpoint(CONSTELLATION_ID, REGION_ID, expected_requests)
            .with_region_endpoint(REGION_ID, expected_requests)
    }

    pub fn with_type_page_endpoint(
        mut self,
        page: u32,
        type_ids: Vec<i64>,
        expected_requests: usize,
    ) -> Self {
        self.mock_builders.push(Box::new(move |context| {
            context
                .universe()
                .create_type_page_endpoint(page, &type_ids, expected_requests)
        }));
        self
    }

    pub fn with_type_endpoint(
        mut self,
        type_id: i64,
        published: bool,
        market_group_id: Option<i64>,
        expected_requests: usize,
    ) -> Self {
        self.mock_builders.push(Box::new(move |context| {
            context.universe().create_type_endpoint(
                type_id,
                published,
                market_group_id,
                expected_requests,
            )
        }));
        self
    }

    pub fn with_structure_feed_endpoint(mut self, feed: Value, expected_requests: usize) -> Self {
        self.mock_builders.push(Box::new(move |context| {
            context
                .universe()
                .create_structure_feed_endpoint(&feed, expected_requests)
        }));
        self
    }

    /// Add an endpoint answering `status` with no body.
    pub fn with_error_endpoint(
        mut self,
        method: &'static str,
        path: impl Into<String>,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        let path = path.into();
        self.mock_builders.push(Box::new(move |context| {
            context
                .universe()
                .create_error_endpoint(method, &path, status, expected_requests)
        }));
        self
    }

    /// Build the test context, executing all queued operations.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_location_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::CachedLocation),
                schema.create_table_from_entity(entity::prelude::MarketTypeSet),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for (id, expires_at, location) in self.cached_locations {
            setup
                .insert_cached_location(id, expires_at, &location)
                .await?;
        }

        if let Some(type_ids) = self.market_types {
            setup.insert_market_types(&type_ids).await?;
        }

        // 3. Create mock endpoints in declaration order
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup));
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}
