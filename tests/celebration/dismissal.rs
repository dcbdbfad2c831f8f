//! Manual dismissal tests

use fanfare::celebration::{self, CelebrationHandle, CelebrationQueue};
use tokio::time::Instant;

use crate::common::{DisplayLog, at, unlock};

fn current_name(handle: &CelebrationHandle) -> Option<String> {
    handle
        .snapshot()
        .current
        .map(|c| c.name().to_string())
}

#[tokio::test(start_paused = true)]
async fn test_dismiss_still_waits_for_gap() {
    let start = Instant::now();
    let (handle, _task) = celebration::spawn(CelebrationQueue::new());

    handle.enqueue(unlock("A", 5)).unwrap();
    handle.enqueue(unlock("B", 3)).unwrap();
    at(start, 1000).await;

    handle.dismiss().unwrap();
    at(start, 1001).await;
    assert_eq!(current_name(&handle), None);
    assert_eq!(handle.snapshot().pending_count, 1);

    at(start, 1299).await;
    assert_eq!(current_name(&handle), None);
    at(start, 1301).await;
    assert_eq!(current_name(&handle).as_deref(), Some("B"));
}

#[tokio::test(start_paused = true)]
async fn test_double_dismiss_skips_only_one() {
    let start = Instant::now();
    let (handle, _task) = celebration::spawn(CelebrationQueue::new());
    let log = DisplayLog::start(handle.subscribe());

    handle.enqueue(unlock("A", 3)).unwrap();
    handle.enqueue(unlock("B", 3)).unwrap();
    handle.enqueue(unlock("C", 3)).unwrap();
    at(start, 500).await;

    handle.dismiss().unwrap();
    handle.dismiss().unwrap();
    at(start, 801).await;

    assert_eq!(current_name(&handle).as_deref(), Some("B"));
    assert_eq!(handle.snapshot().pending_count, 1);

    handle.settled().await.unwrap();
    assert_eq!(log.names(), vec!["A", "B", "C"]);
}

#[tokio::test(start_paused = true)]
async fn test_dismiss_racing_hold_expiry() {
    let start = Instant::now();
    let (handle, _task) = celebration::spawn(CelebrationQueue::new());

    handle.enqueue(unlock("A", 2)).unwrap();
    handle.enqueue(unlock("B", 2)).unwrap();
    handle.enqueue(unlock("C", 2)).unwrap();

    // Same instant the hold timer for A fires
    at(start, 3000).await;
    handle.dismiss().unwrap();

    at(start, 3301).await;
    assert_eq!(current_name(&handle).as_deref(), Some("B"));
    assert_eq!(handle.snapshot().pending_count, 1);
}

#[tokio::test(start_paused = true)]
async fn test_dismiss_when_idle_is_noop() {
    let start = Instant::now();
    let (handle, _task) = celebration::spawn(CelebrationQueue::new());

    handle.dismiss().unwrap();
    at(start, 1).await;
    assert!(handle.snapshot().idle);

    handle.enqueue(unlock("A", 4)).unwrap();
    at(start, 2).await;
    assert_eq!(current_name(&handle).as_deref(), Some("A"));
}
