//! Shared test utilities for celebration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use fanfare::celebration::CelebrationSnapshot;
use fanfare::{AchievementInfo, Tier, UnlockEvent};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Unlock event with the given display name and tier
pub fn unlock(name: &str, tier: u8) -> UnlockEvent {
    let id = name.to_lowercase().replace(' ', "_");
    UnlockEvent::new(
        AchievementInfo::new(id, name),
        Tier::new(tier).expect("test tiers are in range"),
    )
}

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Sleep until `millis` after `start` on the (paused) test clock
pub async fn at(start: Instant, millis: u64) {
    tokio::time::sleep_until(start + ms(millis)).await;
}

/// Records the name of every celebration that takes the display slot
pub struct DisplayLog {
    names: Arc<Mutex<Vec<String>>>,
    task: JoinHandle<()>,
}

impl DisplayLog {
    pub fn start(mut snapshots: watch::Receiver<CelebrationSnapshot>) -> Self {
        let names = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&names);
        let task = tokio::spawn(async move {
            let mut last = None;
            while snapshots.changed().await.is_ok() {
                let current = snapshots.borrow_and_update().current.clone();
                let id = current.as_ref().map(|c| c.id());
                if id != last {
                    last = id;
                    if let Some(current) = current {
                        log.lock().unwrap().push(current.name().to_string());
                    }
                }
            }
        });
        Self { names, task }
    }

    pub fn names(&self) -> Vec<String> {
        self.names.lock().unwrap().clone()
    }
}

impl Drop for DisplayLog {
    fn drop(&mut self) {
        self.task.abort();
    }
}
