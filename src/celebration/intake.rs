//! Unlock event intake
//!
//! [`UnlockFeed`] is the push-based subscription point for the achievement
//! backend: every published event is handed to each live subscriber. The
//! celebration scheduler is one subscriber; badge counters or logs can be
//! others and still see events that never reach the display slot.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

use crate::UnlockEvent;

use super::scheduler::CelebrationHandle;

type Handler = Arc<dyn Fn(&UnlockEvent) + Send + Sync>;

/// Error type for reading unlock events
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("Failed to read unlock events: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid unlock event on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Default)]
struct Subscribers {
    next_id: u64,
    handlers: BTreeMap<u64, Handler>,
}

/// Fan-out point for unlock events
#[derive(Clone, Default)]
pub struct UnlockFeed {
    subscribers: Arc<Mutex<Subscribers>>,
}

impl UnlockFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler called for every published event.
    ///
    /// The handler stays registered until the returned [`Subscription`] is
    /// unsubscribed or dropped.
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&UnlockEvent) + Send + Sync + 'static,
    {
        let mut subscribers = lock(&self.subscribers);
        let id = subscribers.next_id;
        subscribers.next_id += 1;
        subscribers.handlers.insert(id, Arc::new(handler));
        drop(subscribers);

        Subscription {
            feed: Arc::clone(&self.subscribers),
            id,
        }
    }

    /// Deliver an event to every subscriber, in subscription order.
    ///
    /// Events are not deduplicated.
    pub fn publish(&self, event: &UnlockEvent) {
        // Handlers run outside the lock so they may subscribe or unsubscribe
        let handlers: Vec<Handler> = lock(&self.subscribers).handlers.values().cloned().collect();
        debug!(
            achievement = %event.achievement.id,
            subscribers = handlers.len(),
            "Publishing unlock event"
        );
        for handler in handlers {
            handler(event);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        lock(&self.subscribers).handlers.len()
    }
}

/// Live registration on an [`UnlockFeed`]; unsubscribes on drop
pub struct Subscription {
    feed: Arc<Mutex<Subscribers>>,
    id: u64,
}

impl Subscription {
    pub fn unsubscribe(self) {
        // Drop does the work
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        lock(&self.feed).handlers.remove(&self.id);
    }
}

/// Handlers never run under the lock, so a poisoned lock still holds a
/// consistent subscriber map
fn lock(subscribers: &Mutex<Subscribers>) -> MutexGuard<'_, Subscribers> {
    subscribers.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Route every event published on `feed` into a celebration scheduler
pub fn connect(feed: &UnlockFeed, handle: CelebrationHandle) -> Subscription {
    feed.subscribe(move |event| {
        if let Err(e) = handle.enqueue(event.clone()) {
            warn!(error = %e, achievement = %event.achievement.id, "Unlock event dropped");
        }
    })
}

/// Read newline-delimited JSON unlock events, skipping blank lines
pub async fn read_json_lines<R>(reader: R) -> Result<Vec<UnlockEvent>, IntakeError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut events = Vec::new();
    let mut line_no = 0;

    while let Some(line) = lines.next_line().await? {
        line_no += 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let event = serde_json::from_str(trimmed).map_err(|source| IntakeError::Parse {
            line: line_no,
            source,
        })?;
        events.push(event);
    }

    Ok(events)
}
