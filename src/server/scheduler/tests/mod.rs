use std::time::Duration;

use static_data_test_utils::prelude::*;

use crate::server::{
    error::Error,
    model::app::AppState,
    scheduler::{job, JobTracker, Scheduler},
};

mod tracker;
