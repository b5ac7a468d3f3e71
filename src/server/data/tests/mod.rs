use static_data_test_utils::prelude::*;

use crate::server::{
    data::{location::LocationRepository, market_type::MarketTypeRepository},
    error::cache::CacheError,
};
