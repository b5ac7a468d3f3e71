use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use super::*;

/// Tests that stop waits for in-flight runs to finish.
///
/// Expected: Every spawned run completes before stop returns
#[tokio::test]
async fn stop_awaits_in_flight_runs() {
    let tracker = JobTracker::new(Duration::from_secs(5));
    let completed = Arc::new(AtomicUsize::new(0));

    for _ in 0..3 {
        let completed = Arc::clone(&completed);
        let spawned = tracker
            .spawn(async move {
                tokio::time::sleep(Duration::from_millis(20)).await;
                completed.fetch_add(1, Ordering::SeqCst);
            })
            .await;
        assert!(spawned);
    }

    tracker.stop().await;

    assert_eq!(completed.load(Ordering::SeqCst), 3);
    assert_eq!(tracker.active_count().await, 0);
}

/// Tests that a run exceeding the shutdown timeout is abandoned.
///
/// Expected: stop returns and the run never completes
#[tokio::test]
async fn stop_aborts_runs_exceeding_timeout() {
    let tracker = JobTracker::new(Duration::from_millis(10));
    let completed = Arc::new(AtomicUsize::new(0));

    let run_completed = Arc::clone(&completed);
    tracker
        .spawn(async move {
            tokio::time::sleep(Duration::from_secs(60)).await;
            run_completed.fetch_add(1, Ordering::SeqCst);
        })
        .await;

    tracker.stop().await;

    assert_eq!(completed.load(Ordering::SeqCst), 0);
}

/// Tests spawning after the tracker has been stopped.
///
/// Expected: The run is refused
#[tokio::test]
async fn spawn_after_stop_is_refused() {
    let tracker = JobTracker::new(Duration::from_secs(1));
    tracker.stop().await;

    let spawned = tracker.spawn(async {}).await;

    assert!(!spawned);
    assert_eq!(tracker.active_count().await, 0);
}
