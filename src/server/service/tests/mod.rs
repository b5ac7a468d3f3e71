use std::time::Duration;

use chrono::Utc;
use static_data_test_utils::prelude::*;

use crate::server::{
    data::location::LocationRepository,
    error::{market::MarketTypeError, Error},
    model::app::AppState,
};

mod region;
