//! Intake fan-out into the scheduler

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use fanfare::celebration::{self, CelebrationQueue, RenderMode, UnlockFeed};
use tokio::time::Instant;

use crate::common::{DisplayLog, at, unlock};

#[tokio::test(start_paused = true)]
async fn test_feed_drives_scheduler_and_side_channel() {
    let start = Instant::now();
    let (handle, _task) = celebration::spawn(CelebrationQueue::new());
    let log = DisplayLog::start(handle.subscribe());

    let feed = UnlockFeed::new();
    let badge = Arc::new(AtomicUsize::new(0));
    let _badge_sub = {
        let badge = Arc::clone(&badge);
        feed.subscribe(move |_| {
            badge.fetch_add(1, Ordering::SeqCst);
        })
    };
    let _celebrations = celebration::connect(&feed, handle.clone());

    feed.publish(&unlock("Hidden", 1));
    feed.publish(&unlock("Streak Starter", 3));
    at(start, 1).await;

    assert_eq!(badge.load(Ordering::SeqCst), 2);
    let snapshot = handle.snapshot();
    assert_eq!(
        RenderMode::select(snapshot.current.as_ref()),
        RenderMode::Standard
    );

    handle.settled().await.unwrap();
    assert_eq!(log.names(), vec!["Streak Starter"]);
}

#[tokio::test(start_paused = true)]
async fn test_unsubscribed_feed_stops_enqueueing() {
    let start = Instant::now();
    let (handle, _task) = celebration::spawn(CelebrationQueue::new());
    let feed = UnlockFeed::new();

    let subscription = celebration::connect(&feed, handle.clone());
    subscription.unsubscribe();

    feed.publish(&unlock("Ignored", 4));
    at(start, 1).await;

    assert!(handle.snapshot().current.is_none());
    assert_eq!(feed.subscriber_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_independent_queues_do_not_share_state() {
    let start = Instant::now();
    let (first, _first_task) = celebration::spawn(CelebrationQueue::new());
    let (second, _second_task) = celebration::spawn(CelebrationQueue::new());

    let feed = UnlockFeed::new();
    let _a = celebration::connect(&feed, first.clone());
    let _b = celebration::connect(&feed, second.clone());

    feed.publish(&unlock("Shared", 2));
    at(start, 1).await;
    first.dismiss().unwrap();
    at(start, 2).await;

    assert!(first.snapshot().current.is_none());
    assert_eq!(second.snapshot().current.unwrap().name(), "Shared");
}
