use std::{sync::Arc, time::Duration};

use tokio::sync::{Semaphore, SemaphorePermit};

use crate::server::{
    error::upstream::UpstreamError,
    model::esi::{EsiConstellation, EsiName, EsiRegion, EsiSolarSystem, EsiStation, EsiType},
    upstream::send_json,
};

/// Client for the universe API.
///
/// Per-ID location and classification calls share one bounded pool of permits, and type
/// detail calls share another, so a large batch or catalog refresh never has more than a
/// fixed number of requests outstanding. The region list and the type catalog pages are
/// fetched at most once per refresh cycle and are not throttled.
///
/// Cloning is cheap; clones share the underlying connection pool and permits.
#[derive(Clone)]
pub struct EsiClient {
    http: reqwest::Client,
    base_url: String,
    location_permits: Arc<Semaphore>,
    type_permits: Arc<Semaphore>,
}

impl EsiClient {
    pub const DEFAULT_LOCATION_PERMITS: usize = 20;
    pub const DEFAULT_TYPE_PERMITS: usize = 200;
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Builds a client with the default request timeout and permit capacities.
    ///
    /// # Arguments
    /// - `base_url` - API root including the version segment, e.g. `https://esi.evetech.net/latest`
    /// - `user_agent` - User agent sent with every request
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .user_agent(user_agent)
            .build()
            .map_err(UpstreamError::Client)?;

        Ok(Self::with_http_client(http, base_url))
    }

    /// Wraps an existing HTTP client with the default permit capacities.
    pub fn with_http_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            location_permits: Arc::new(Semaphore::new(Self::DEFAULT_LOCATION_PERMITS)),
            type_permits: Arc::new(Semaphore::new(Self::DEFAULT_TYPE_PERMITS)),
        }
    }

    /// Replaces both permit pools.
    pub fn with_permits(mut self, location_permits: usize, type_permits: usize) -> Self {
        self.location_permits = Arc::new(Semaphore::new(location_permits.max(1)));
        self.type_permits = Arc::new(Semaphore::new(type_permits.max(1)));
        self
    }

    pub async fn get_station(&self, station_id: i64) -> Result<EsiStation, UpstreamError> {
        let url = format!("{}/universe/stations/{}/", self.base_url, station_id);
        let _permit = acquire(&self.location_permits).await;

        send_json(url.clone(), self.http.get(&url)).await
    }

    pub async fn get_solar_system(&self, system_id: i64) -> Result<EsiSolarSystem, UpstreamError> {
        let url = format!("{}/universe/systems/{}/", self.base_url, system_id);
        let _permit = acquire(&self.location_permits).await;

        send_json(url.clone(), self.http.get(&url)).await
    }

    pub async fn get_constellation(
        &self,
        constellation_id: i64,
    ) -> Result<EsiConstellation, UpstreamError> {
        let url = format!(
            "{}/universe/constellations/{}/",
            self.base_url, constellation_id
        );
        let _permit = acquire(&self.location_permits).await;

        send_json(url.clone(), self.http.get(&url)).await
    }

    pub async fn get_region(&self, region_id: i64) -> Result<EsiRegion, UpstreamError> {
        let url = format!("{}/universe/regions/{}/", self.base_url, region_id);
        let _permit = acquire(&self.location_permits).await;

        send_json(url.clone(), self.http.get(&url)).await
    }

    /// Lists every region ID.
    pub async fn get_region_ids(&self) -> Result<Vec<i64>, UpstreamError> {
        let url = format!("{}/universe/regions/", self.base_url);

        send_json(url.clone(), self.http.get(&url)).await
    }

    /// Resolves the name and category of each ID in one call.
    pub async fn get_names(&self, ids: &[i64]) -> Result<Vec<EsiName>, UpstreamError> {
        let url = format!("{}/universe/names/", self.base_url);
        let _permit = acquire(&self.location_permits).await;

        send_json(url.clone(), self.http.post(&url).json(ids)).await
    }

    /// Fetches one page of the item type catalog; pages past the end are empty.
    pub async fn get_type_ids_page(&self, page: u32) -> Result<Vec<i64>, UpstreamError> {
        let url = format!("{}/universe/types/?page={}", self.base_url, page);

        send_json(url.clone(), self.http.get(&url)).await
    }

    pub async fn get_type(&self, type_id: i64) -> Result<EsiType, UpstreamError> {
        let url = format!("{}/universe/types/{}/", self.base_url, type_id);
        let _permit = acquire(&self.type_permits).await;

        send_json(url.clone(), self.http.get(&url)).await
    }
}

/// Waits for a free permit. The pools are never closed, so a closed pool only means the
/// request proceeds unthrottled.
async fn acquire(permits: &Semaphore) -> Option<SemaphorePermit<'_>> {
    permits.acquire().await.ok()
}

#[cfg(test)]
mod tests {
    use std::{
        io::Write,
        sync::atomic::{AtomicUsize, Ordering},
    };

    use futures::future::join_all;
    use mockito::{Mock, Server, ServerGuard};

    use super::*;

    /// Mounts `path` with a body that takes `delay` to produce, recording the highest number
    /// of bodies being produced at the same time in `max_in_flight`.
    async fn mock_slow_body(
        server: &mut ServerGuard,
        path: &str,
        body: &'static str,
        delay: Duration,
        expected: usize,
        max_in_flight: Arc<AtomicUsize>,
    ) -> Mock {
        let in_flight = Arc::new(AtomicUsize::new(0));

        server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_chunked_body(move |writer| {
                let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                max_in_flight.fetch_max(now, Ordering::SeqCst);
                std::thread::sleep(delay);
                in_flight.fetch_sub(1, Ordering::SeqCst);
                writer.write_all(body.as_bytes())
            })
            .expect(expected)
            .create_async()
            .await
    }

    /// Tests decoding of a station response.
    ///
    /// Expected: Ok with the station's system reference
    #[tokio::test]
    async fn decodes_station() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/universe/stations/60003760/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"station_id":60003760,"name":"Jita IV - Moon 4","system_id":30000142,
                    "type_id":1531,"position":{"x":1.0,"y":2.0,"z":3.0},"max_dockable_ship_volume":50000000}"#,
            )
            .expect(1)
            .create_async()
            .await;

        let client = EsiClient::with_http_client(reqwest::Client::new(), &server.url());
        let station = client.get_station(60003760).await;

        assert!(station.is_ok());
        let station = station.unwrap();
        assert_eq!(station.system_id, 30000142);
        assert_eq!(station.position.z, 3.0);

        mock.assert_async().await;
    }

    /// Tests that a non-success status is surfaced with the status code.
    ///
    /// Expected: Err(UpstreamError::Status) with 404
    #[tokio::test]
    async fn surfaces_error_status() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/universe/regions/10000002/")
            .with_status(404)
            .expect(1)
            .create_async()
            .await;

        let client = EsiClient::with_http_client(reqwest::Client::new(), &server.url());
        let result = client.get_region(10000002).await;

        assert!(matches!(
            result,
            Err(UpstreamError::Status { status, .. }) if status.as_u16() == 404
        ));

        mock.assert_async().await;
    }

    /// Tests that a malformed body is surfaced as a decode failure.
    ///
    /// Expected: Err(UpstreamError::Decode)
    #[tokio::test]
    async fn surfaces_malformed_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/universe/regions/")
            .with_status(200)
            .with_body("not json")
            .expect(1)
            .create_async()
            .await;

        let client = EsiClient::with_http_client(reqwest::Client::new(), &server.url());
        let result = client.get_region_ids().await;

        assert!(matches!(result, Err(UpstreamError::Decode { .. })));

        mock.assert_async().await;
    }

    /// Tests that location calls wait for a free permit.
    ///
    /// Expected: every call succeeds and no two responses are in flight at once
    #[tokio::test]
    async fn location_permits_bound_concurrency() {
        let mut server = Server::new_async().await;
        let max_in_flight = Arc::new(AtomicUsize::new(0));
        let mock = mock_slow_body(
            &mut server,
            "/universe/stations/60003760/",
            r#"{"station_id":60003760,"name":"Jita IV - Moon 4","system_id":30000142,
                "position":{"x":1.0,"y":2.0,"z":3.0}}"#,
            Duration::from_millis(50),
            4,
            max_in_flight.clone(),
        )
        .await;

        let client =
            EsiClient::with_http_client(reqwest::Client::new(), &server.url()).with_permits(1, 1);
        let results = join_all((0..4).map(|_| client.get_station(60003760))).await;

        assert!(results.iter().all(|r| r.is_ok()), "Error: {:?}", results);
        assert_eq!(max_in_flight.load(Ordering::SeqCst), 1);

        mock.assert_async().await;
    }

    /// Tests that type detail calls draw from their own permit pool.
    ///
    /// Expected: with two type permits, at most two responses are in flight at once
    #[tokio::test]
    async fn type_permits_bound_concurrency() {
        let mut server = Server::new_async().await;
        let max_in_flight = Arc::new(AtomicUsize::new(0));
        let mock = mock_slow_body(
            &mut server,
            "/universe/types/34/",
            r#"{"type_id":34,"name":"Tritanium","published":true,"market_group_id":1857}"#,
            Duration::from_millis(50),
            6,
            max_in_flight.clone(),
        )
        .await;

        let client =
            EsiClient::with_http_client(reqwest::Client::new(), &server.url()).with_permits(1, 2);
        let results = join_all((0..6).map(|_| client.get_type(34))).await;

        assert!(results.iter().all(|r| r.is_ok()), "Error: {:?}", results);
        assert!(max_in_flight.load(Ordering::SeqCst) <= 2);

        mock.assert_async().await;
    }
}
