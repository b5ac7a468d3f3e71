//! Upstream HTTP mock endpoint creation utilities.
//!
//! Each method registers a mock with the test's mockito server that verifies it was called
//! exactly `expected_requests` times. Mocks returned from these methods are asserted by
//! the caller; mocks declared on the `TestBuilder` are asserted by `assert_mocks()`.

use mockito::{Matcher, Mock};
use serde_json::Value;

use crate::fixtures::universe::{factory, UniverseFixtures};

impl<'a> UniverseFixtures<'a> {
    /// Create a mock GET endpoint returning `body` as JSON.
    pub fn create_json_endpoint(
        &mut self,
        path: &str,
        body: &Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint answering with an error status and no body.
    pub fn create_error_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock(method, path)
            .with_status(status)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `/universe/stations/{station_id}/` endpoint.
    pub fn create_station_endpoint(
        &mut self,
        station_id: i64,
        system_id: i64,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("/universe/stations/{}/", station_id);
        self.create_json_endpoint(
            &path,
            &factory::station(station_id, system_id),
            expected_requests,
        )
    }

    /// Create a mock `/universe/systems/{system_id}/` endpoint.
    pub fn create_solar_system_endpoint(
        &mut self,
        system_id: i64,
        constellation_id: i64,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("/universe/systems/{}/", system_id);
        self.create_json_endpoint(
            &path,
            &factory::solar_system(system_id, constellation_id),
            expected_requests,
        )
    }

    /// Create a mock `/universe/constellations/{constellation_id}/` endpoint.
    pub fn create_constellation_endpoint(
        &mut self,
        constellation_id: i64,
        region_id: i64,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("/universe/constellations/{}/", constellation_id);
        self.create_json_endpoint(
            &path,
            &factory::constellation(constellation_id, region_id),
            expected_requests,
        )
    }

    /// Create a mock `/universe/regions/{region_id}/` endpoint.
    pub fn create_region_endpoint(&mut self, region_id: i64, expected_requests: usize) -> Mock {
        let path = format!("/universe/regions/{}/", region_id);
        self.create_json_endpoint(&path, &factory::region(region_id), expected_requests)
    }

    /// Create a mock `/universe/regions/` endpoint listing `region_ids`.
    pub fn create_region_ids_endpoint(
        &mut self,
        region_ids: &[i64],
        expected_requests: usize,
    ) -> Mock {
        self.create_json_endpoint(
            "/universe/regions/",
            &serde_json::json!(region_ids),
            expected_requests,
        )
    }

    /// Create a mock `POST /universe/names/` endpoint for a single ID.
    ///
    /// Only requests whose body is exactly `[id]` match, so several IDs can be mocked side
    /// by side.
    pub fn create_names_endpoint(
        &mut self,
        id: i64,
        category: &str,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", "/universe/names/")
            .match_body(Matcher::Json(serde_json::json!([id])))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(factory::names(id, category).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `/universe/types/?page={page}` endpoint listing `type_ids`.
    pub fn create_type_page_endpoint(
        &mut self,
        page: u32,
        type_ids: &[i64],
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", "/universe/types/")
            .match_query(Matcher::UrlEncoded("page".into(), page.to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::json!(type_ids).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `/universe/types/{type_id}/` endpoint.
    pub fn create_type_endpoint(
        &mut self,
        type_id: i64,
        published: bool,
        market_group_id: Option<i64>,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("/universe/types/{}/", type_id);
        self.create_json_endpoint(
            &path,
            &factory::esi_type(type_id, published, market_group_id),
            expected_requests,
        )
    }

    /// Create a mock `/api/structure/all` endpoint returning `feed`.
    pub fn create_structure_feed_endpoint(&mut self, feed: &Value, expected_requests: usize) -> Mock {
        self.create_json_endpoint("/api/structure/all", feed, expected_requests)
    }
}
