//! HTTP clients for the upstream data sources.
//!
//! - [`esi::EsiClient`] - the universe API, used for per-ID location lookups, name
//!   classification and the item type catalog
//! - [`structure::StructureFeedClient`] - the third-party feed listing every known
//!   player-built structure

pub mod esi;
pub mod structure;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::server::error::upstream::UpstreamError;

/// Sends a request and decodes a successful JSON response.
///
/// Any non-2xx status is a failure for the call; the body is not inspected.
pub(crate) async fn send_json<T>(url: String, request: RequestBuilder) -> Result<T, UpstreamError>
where
    T: DeserializeOwned,
{
    tracing::debug!("Requesting {}", url);

    let response = match request.send().await {
        Ok(response) => response,
        Err(source) => return Err(UpstreamError::Request { url, source }),
    };

    let status = response.status();
    if !status.is_success() {
        return Err(UpstreamError::Status { url, status });
    }

    match response.json::<T>().await {
        Ok(body) => Ok(body),
        Err(source) => Err(UpstreamError::Decode { url, source }),
    }
}
