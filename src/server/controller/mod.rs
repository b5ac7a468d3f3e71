//! HTTP controller endpoints for the static data API.
//!
//! Controllers extract the request, hand it to a service and shape the result into an HTTP
//! response. Handlers are annotated for utoipa so the OpenAPI document stays in sync.

pub mod location;
pub mod market_type;
