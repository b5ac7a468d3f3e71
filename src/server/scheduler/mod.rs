//! Scheduler for the background refresh jobs.
//!
//! Structures and regions are refreshed every 30 minutes and the market type set once a
//! day. Every job also runs once as soon as the scheduler starts. Runs are spawned on a
//! [`JobTracker`] so that shutdown can wait for in-flight writes.

use std::{future::Future, sync::Arc};

use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::Error, model::app::AppState};

pub mod config;
pub mod job;
pub mod tracker;

#[cfg(test)]
mod tests;

pub use self::tracker::JobTracker;

use self::config::{location as location_config, market_type as market_type_config};

/// Job scheduler for the structure, region and market type refreshes.
pub struct Scheduler {
    state: AppState,
    sched: JobScheduler,
    tracker: JobTracker,
    started: bool,
}

impl Scheduler {
    /// Creates a new instance of [`Scheduler`].
    ///
    /// # Arguments
    /// - `state` - Application state cloned into every job run
    ///
    /// # Returns
    /// - `Ok(Scheduler)` - Successfully created scheduler instance
    /// - `Err(Error)` - Failed to initialize the underlying job scheduler
    pub async fn new(state: AppState) -> Result<Self, Error> {
        let sched = JobScheduler::new().await?;

        Ok(Self {
            state,
            sched,
            tracker: JobTracker::default(),
            started: false,
        })
    }

    /// Registers all refresh jobs, starts the scheduler and runs each job once.
    ///
    /// # Returns
    /// - `Ok(())` - All jobs registered and the scheduler started
    /// - `Err(Error)` - Failed to register a job or start the scheduler
    pub async fn start(&mut self) -> Result<(), Error> {
        self.schedule_job(
            location_config::CRON_EXPRESSION,
            "structure",
            job::refresh_structures,
        )
        .await?;

        self.schedule_job(
            location_config::CRON_EXPRESSION,
            "region",
            job::refresh_regions,
        )
        .await?;

        self.schedule_job(
            market_type_config::CRON_EXPRESSION,
            "market type",
            job::refresh_market_types,
        )
        .await?;

        self.sched.start().await?;
        self.started = true;

        // Initial runs so a fresh cache does not wait for the first tick
        self.run_now("structure", job::refresh_structures).await;
        self.run_now("region", job::refresh_regions).await;
        self.run_now("market type", job::refresh_market_types).await;

        Ok(())
    }

    /// Schedules a recurring job with the specified cron expression.
    ///
    /// Every tick spawns one run of `function` on the job tracker. The run logs the number of
    /// entries written on success, or the error that aborted the cycle.
    ///
    /// # Arguments
    /// - `cron` - Cron expression defining when the job should run (e.g., "0 0 * * * *" for hourly)
    /// - `name` - Human-readable name for the job (used in log messages)
    /// - `function` - Async refresh returning the count of entries written
    ///
    /// # Returns
    /// - `Ok(())` - Job successfully registered with the scheduler
    /// - `Err(Error)` - Failed to create or add the job (invalid cron expression or scheduler error)
    pub async fn schedule_job<F, Fut>(
        &mut self,
        cron: &str,
        name: &str,
        function: F,
    ) -> Result<(), Error>
    where
        F: Fn(AppState) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<usize, Error>> + Send + 'static,
    {
        let state = self.state.clone();
        let tracker = self.tracker.clone();
        let name = name.to_string();
        let function = Arc::new(function);

        self.sched
            .add(Job::new_async(cron, move |_, _| {
                let state = state.clone();
                let tracker = tracker.clone();
                let name = name.clone();
                let function = Arc::clone(&function);

                Box::pin(async move {
                    tracker.spawn(run(name, function(state))).await;
                })
            })?)
            .await?;

        Ok(())
    }

    /// Spawns one run of a job outside of its schedule.
    pub async fn run_now<F, Fut>(&self, name: &str, function: F) -> bool
    where
        F: FnOnce(AppState) -> Fut,
        Fut: Future<Output = Result<usize, Error>> + Send + 'static,
    {
        self.tracker
            .spawn(run(name.to_string(), function(self.state.clone())))
            .await
    }

    /// Shuts the cron scheduler down and waits for in-flight runs.
    pub async fn stop(&mut self) -> Result<(), Error> {
        tracing::info!("Shutting down scheduler...");

        if self.started {
            self.sched.shutdown().await?;
            self.started = false;
        }
        self.tracker.stop().await;

        tracing::info!("Scheduler shut down");

        Ok(())
    }
}

async fn run<Fut>(name: String, refresh: Fut)
where
    Fut: Future<Output = Result<usize, Error>>,
{
    match refresh.await {
        Ok(count) => tracing::info!("Refreshed {} {} entries", count, name),
        Err(e) => tracing::error!("Error refreshing {} data: {:?}", name, e),
    }
}
