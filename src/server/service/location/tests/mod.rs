use chrono::Utc;
use static_data_test_utils::prelude::*;

use crate::{
    model::location::Location,
    server::{
        config::ClassifierPolicy,
        error::{location::LocationError, Error},
        model::app::AppState,
        service::location::LocationService,
    },
};

mod resolve_many;

/// Builds a location service against the test's mock server.
fn location_service(test: &TestContext, classifier: ClassifierPolicy) -> LocationService {
    let state: AppState = test.to_app_state();

    LocationService::new(&state.db, &state.esi_client, classifier)
}

/// A timestamp one hour in the past.
fn expired() -> i64 {
    Utc::now().timestamp() - 3600
}

/// A timestamp one hour in the future.
fn fresh() -> i64 {
    Utc::now().timestamp() + 3600
}
