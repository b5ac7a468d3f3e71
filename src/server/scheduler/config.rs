use std::time::Duration;

pub mod location {
    /// Cron expression for structure and region refreshes
    /// Runs every 30 minutes (00:00, 00:30, 01:00, etc.)
    pub const CRON_EXPRESSION: &str = "0 0,30 * * * *";
}

pub mod market_type {
    /// Cron expression for market type refreshes
    /// Runs once a day at midnight UTC
    pub const CRON_EXPRESSION: &str = "0 0 0 * * *";
}

pub mod tracker {
    use super::*;

    /// How long `stop()` waits for each in-flight run before abandoning it
    pub const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);
}
