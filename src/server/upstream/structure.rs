use std::{collections::HashMap, time::Duration};

use crate::server::{
    error::upstream::UpstreamError, model::structure::StructureRecord, upstream::send_json,
};

/// Client for the third-party structure feed.
///
/// The feed is one large document fetched once per refresh cycle, so requests carry no
/// overall timeout; only establishing the connection is bounded.
#[derive(Clone)]
pub struct StructureFeedClient {
    http: reqwest::Client,
    base_url: String,
}

impl StructureFeedClient {
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(base_url: &str, user_agent: &str) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Self::CONNECT_TIMEOUT)
            .user_agent(user_agent)
            .build()
            .map_err(UpstreamError::Client)?;

        Ok(Self::with_http_client(http, base_url))
    }

    pub fn with_http_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetches every known structure, keyed by structure ID as a decimal string.
    pub async fn get_all_structures(
        &self,
    ) -> Result<HashMap<String, StructureRecord>, UpstreamError> {
        let url = format!("{}/api/structure/all", self.base_url);

        send_json(url.clone(), self.http.get(&url)).await
    }
}
