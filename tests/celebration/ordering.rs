//! Display order tests

use fanfare::celebration::{self, CelebrationQueue};
use tokio::time::Instant;

use crate::common::{DisplayLog, at, unlock};

#[tokio::test(start_paused = true)]
async fn test_legendary_displayed_before_waiting_standard() {
    let (handle, _task) = celebration::spawn(CelebrationQueue::new());
    let log = DisplayLog::start(handle.subscribe());

    handle.enqueue(unlock("Warmup", 2)).unwrap();
    handle.enqueue(unlock("Streak Starter", 3)).unwrap();
    handle.enqueue(unlock("Legendary Grind", 5)).unwrap();
    handle.settled().await.unwrap();

    assert_eq!(log.names(), vec!["Warmup", "Legendary Grind", "Streak Starter"]);
}

#[tokio::test(start_paused = true)]
async fn test_legendary_does_not_preempt_current() {
    let start = Instant::now();
    let (handle, _task) = celebration::spawn(CelebrationQueue::new());

    handle.enqueue(unlock("Small Win", 2)).unwrap();
    at(start, 10).await;
    handle.enqueue(unlock("Legendary Grind", 5)).unwrap();
    at(start, 20).await;

    let snapshot = handle.snapshot();
    assert_eq!(snapshot.current.unwrap().name(), "Small Win");
    assert_eq!(snapshot.pending_count, 1);
}

#[tokio::test(start_paused = true)]
async fn test_lower_tiers_never_overtake_each_other() {
    let (handle, _task) = celebration::spawn(CelebrationQueue::new());
    let log = DisplayLog::start(handle.subscribe());

    handle.enqueue(unlock("Opener", 2)).unwrap();
    handle.enqueue(unlock("Three", 3)).unwrap();
    handle.enqueue(unlock("Four", 4)).unwrap();
    handle.enqueue(unlock("Two", 2)).unwrap();
    handle.enqueue(unlock("Five A", 5)).unwrap();
    handle.enqueue(unlock("Five B", 5)).unwrap();
    handle.settled().await.unwrap();

    assert_eq!(
        log.names(),
        vec!["Opener", "Five A", "Five B", "Three", "Four", "Two"]
    );
}

#[tokio::test(start_paused = true)]
async fn test_hidden_tier_never_displayed() {
    let start = Instant::now();
    let (handle, _task) = celebration::spawn(CelebrationQueue::new());
    let log = DisplayLog::start(handle.subscribe());

    for i in 0..5 {
        handle.enqueue(unlock(&format!("Tiny {i}"), 1)).unwrap();
    }
    at(start, 1).await;

    let snapshot = handle.snapshot();
    assert!(snapshot.current.is_none());
    assert_eq!(snapshot.pending_count, 0);
    assert!(snapshot.idle);

    handle.enqueue(unlock("Visible", 2)).unwrap();
    handle.enqueue(unlock("Tiny 5", 1)).unwrap();
    handle.enqueue(unlock("Also Visible", 3)).unwrap();
    handle.settled().await.unwrap();

    assert_eq!(log.names(), vec!["Visible", "Also Visible"]);
}

#[tokio::test(start_paused = true)]
async fn test_same_achievement_celebrated_twice() {
    let (handle, _task) = celebration::spawn(CelebrationQueue::new());
    let log = DisplayLog::start(handle.subscribe());

    handle.enqueue(unlock("Echo", 3)).unwrap();
    handle.enqueue(unlock("Echo", 3)).unwrap();
    handle.settled().await.unwrap();

    assert_eq!(log.names(), vec!["Echo", "Echo"]);
}
