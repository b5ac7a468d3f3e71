use std::{
    future::Future,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use tokio::{sync::RwLock, task::JoinHandle};

use super::config::tracker::SHUTDOWN_TIMEOUT;

/// Tracks spawned job runs so shutdown can wait for them.
///
/// Finished handles are pruned whenever a new run is spawned. Once `stop()` has been called
/// the tracker refuses new runs.
#[derive(Clone)]
pub struct JobTracker {
    handles: Arc<RwLock<Vec<JoinHandle<()>>>>,
    closed: Arc<AtomicBool>,
    shutdown_timeout: Duration,
}

impl Default for JobTracker {
    fn default() -> Self {
        Self::new(SHUTDOWN_TIMEOUT)
    }
}

impl JobTracker {
    pub fn new(shutdown_timeout: Duration) -> Self {
        Self {
            handles: Arc::new(RwLock::new(Vec::new())),
            closed: Arc::new(AtomicBool::new(false)),
            shutdown_timeout,
        }
    }

    /// Spawns a run on the runtime and records its handle.
    ///
    /// # Returns
    /// - `true` - The run was spawned
    /// - `false` - The tracker has been stopped and the run was dropped
    pub async fn spawn<F>(&self, run: F) -> bool
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut handles = self.handles.write().await;

        if self.closed.load(Ordering::SeqCst) {
            return false;
        }

        handles.retain(|handle| !handle.is_finished());
        handles.push(tokio::spawn(run));

        true
    }

    /// Number of runs that have not finished yet.
    pub async fn active_count(&self) -> usize {
        let handles = self.handles.read().await;
        handles.iter().filter(|handle| !handle.is_finished()).count()
    }

    /// Stops accepting runs and waits for the in-flight ones.
    ///
    /// Each run gets the configured shutdown timeout; runs that exceed it are aborted.
    pub async fn stop(&self) {
        let mut handles = self.handles.write().await;
        self.closed.store(true, Ordering::SeqCst);

        let run_count = handles.len();

        for (i, mut handle) in handles.drain(..).enumerate() {
            match tokio::time::timeout(self.shutdown_timeout, &mut handle).await {
                Ok(Ok(())) => tracing::debug!("Job run {} finished", i),
                Ok(Err(e)) => tracing::error!("Job run {} panicked: {:?}", i, e),
                Err(_) => {
                    tracing::warn!("Job run {} did not finish within timeout, aborting", i);
                    handle.abort();
                }
            }
        }

        tracing::debug!("Job tracker stopped ({} run(s) awaited)", run_count);
    }
}
