use std::fmt;

use tokio::time::Instant;
use uuid::Uuid;

use super::tier::Tier;
use super::unlock::UnlockEvent;

/// Locally generated ID, unique per enqueue
///
/// Distinct from the achievement ID: the same achievement may be re-emitted
/// and then celebrates twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CelebrationId(Uuid);

impl CelebrationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CelebrationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CelebrationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An unlock event accepted into a celebration queue.
///
/// Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct QueuedCelebration {
    id: CelebrationId,
    enqueued_at: Instant,
    event: UnlockEvent,
}

impl QueuedCelebration {
    pub fn new(event: UnlockEvent, enqueued_at: Instant) -> Self {
        Self {
            id: CelebrationId::new(),
            enqueued_at,
            event,
        }
    }

    pub fn id(&self) -> CelebrationId {
        self.id
    }

    /// Monotonic arrival time, only meaningful for FIFO tie-breaking
    pub fn enqueued_at(&self) -> Instant {
        self.enqueued_at
    }

    pub fn event(&self) -> &UnlockEvent {
        &self.event
    }

    pub fn tier(&self) -> Tier {
        self.event.tier
    }

    pub fn name(&self) -> &str {
        &self.event.achievement.name
    }
}
