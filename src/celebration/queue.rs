//! Celebration admission state machine
//!
//! Owns the pending list, the single display slot and the single armed
//! timer. It performs no I/O and never sleeps: every transition receives the
//! current instant, and the driver asks [`CelebrationQueue::next_timer`] when
//! to call back. See [`super::scheduler`] for the tokio driver.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::{CelebrationId, QueuedCelebration, UnlockEvent};

use super::pending::PendingQueue;
use super::policy::{DEFAULT_GAP, TierTable};
use super::sound::{Silent, SoundPlayer, has_sound};

/// Observable phase of the queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing showing, nothing pending, no timer armed
    Idle,
    /// A celebration holds the display slot
    Displaying,
    /// Slot cleared, waiting out the inter-item gap
    GapWait,
}

/// Which of the two timers is armed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Hold,
    Gap,
}

/// Identifies one arming of the queue's timer.
///
/// Each arming gets a fresh generation, so a token from a timer that was
/// cancelled or replaced is recognized as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken {
    generation: u64,
    kind: TimerKind,
}

impl TimerToken {
    pub fn kind(&self) -> TimerKind {
        self.kind
    }
}

#[derive(Debug, Clone, Copy)]
struct ArmedTimer {
    token: TimerToken,
    deadline: Instant,
}

/// Queue of pending celebrations with at most one on display
pub struct CelebrationQueue {
    table: TierTable,
    gap: Duration,
    pending: PendingQueue,
    current: Option<QueuedCelebration>,
    timer: Option<ArmedTimer>,
    generation: u64,
    sound: Arc<dyn SoundPlayer>,
}

impl CelebrationQueue {
    /// Queue with the default tier table, gap and no sound
    pub fn new() -> Self {
        Self {
            table: TierTable::default(),
            gap: DEFAULT_GAP,
            pending: PendingQueue::default(),
            current: None,
            timer: None,
            generation: 0,
            sound: Arc::new(Silent),
        }
    }

    pub fn with_table(mut self, table: TierTable) -> Self {
        self.table = table;
        self
    }

    pub fn with_gap(mut self, gap: Duration) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_sound(mut self, sound: Arc<dyn SoundPlayer>) -> Self {
        self.sound = sound;
        self
    }

    // ========================================
    // OPERATIONS
    // ========================================

    /// Accept an unlock event.
    ///
    /// A legendary event goes behind earlier legendary ones but ahead of
    /// everything else; other tiers are appended. When the queue is idle the
    /// head is promoted right away.
    pub fn enqueue(&mut self, event: UnlockEvent, now: Instant) -> CelebrationId {
        let item = QueuedCelebration::new(event, now);
        let id = item.id();
        debug!(
            celebration = %id,
            achievement = %item.event().achievement.id,
            tier = item.tier().get(),
            "Celebration enqueued"
        );
        self.pending.push(item);

        if self.phase() == Phase::Idle {
            self.promote_next(now);
        }
        id
    }

    /// Take the current celebration off the display slot.
    ///
    /// Returns `false` without touching any state when nothing is showing,
    /// e.g. when the hold timer already expired in the same tick. The next
    /// celebration still waits out the regular gap.
    pub fn dismiss_current(&mut self, now: Instant) -> bool {
        let Some(dismissed) = self.current.take() else {
            debug!("Dismiss ignored, nothing on display");
            return false;
        };
        info!(celebration = %dismissed.id(), name = dismissed.name(), "Celebration dismissed");
        self.arm(TimerKind::Gap, now + self.gap);
        true
    }

    /// Deliver a timer expiry.
    ///
    /// Returns `false` if `token` does not belong to the currently armed
    /// timer; such a fire is dropped.
    pub fn on_timer(&mut self, token: TimerToken, now: Instant) -> bool {
        match self.timer {
            Some(armed) if armed.token == token => {}
            _ => {
                debug!(?token, "Stale timer ignored");
                return false;
            }
        }
        self.timer = None;

        match token.kind {
            TimerKind::Hold => {
                if let Some(finished) = self.current.take() {
                    debug!(celebration = %finished.id(), "Celebration finished");
                }
                self.arm(TimerKind::Gap, now + self.gap);
            }
            TimerKind::Gap => self.promote_next(now),
        }
        true
    }

    // ========================================
    // STATE
    // ========================================

    /// The armed timer and when it should fire
    pub fn next_timer(&self) -> Option<(TimerToken, Instant)> {
        self.timer.map(|armed| (armed.token, armed.deadline))
    }

    pub fn current(&self) -> Option<&QueuedCelebration> {
        self.current.as_ref()
    }

    /// Pending celebrations that will occupy the display slot.
    ///
    /// Hidden tiers still waiting behind a gap are not counted.
    pub fn pending_count(&self) -> usize {
        self.pending.visible_len(&self.table)
    }

    pub fn is_displaying(&self) -> bool {
        self.current.is_some()
    }

    /// Nothing showing, nothing pending and no timer armed
    pub fn is_idle(&self) -> bool {
        self.phase() == Phase::Idle && self.pending.is_empty()
    }

    pub fn phase(&self) -> Phase {
        match (&self.current, &self.timer) {
            (Some(_), _) => Phase::Displaying,
            (None, Some(_)) => Phase::GapWait,
            (None, None) => Phase::Idle,
        }
    }

    // ========================================
    // TRANSITIONS
    // ========================================

    /// Move the first visible pending celebration into the display slot.
    ///
    /// Hidden tiers are popped and dropped on the way. The loop is bounded by
    /// the pending length at entry.
    fn promote_next(&mut self, now: Instant) {
        if self.current.is_some() {
            return;
        }
        self.cancel_timer();

        for _ in 0..self.pending.len() {
            let Some(next) = self.pending.pop_front() else {
                break;
            };
            let policy = self.table.policy_for(next.tier());
            if !policy.renders_visually {
                debug!(celebration = %next.id(), name = next.name(), "Skipping hidden tier");
                continue;
            }

            info!(
                celebration = %next.id(),
                name = next.name(),
                tier = next.tier().get(),
                duration_ms = policy.duration.as_millis() as u64,
                "Celebration promoted"
            );
            let tier = next.tier();
            self.current = Some(next);
            self.arm(TimerKind::Hold, now + policy.duration);

            if has_sound(tier) {
                if let Err(e) = self.sound.play(tier) {
                    warn!(error = %e, tier = tier.get(), "Celebration sound failed");
                }
            }
            return;
        }

        debug!("Celebration queue idle");
    }

    /// Arm the single timer, replacing whatever was armed before
    fn arm(&mut self, kind: TimerKind, deadline: Instant) {
        self.generation += 1;
        self.timer = Some(ArmedTimer {
            token: TimerToken {
                generation: self.generation,
                kind,
            },
            deadline,
        });
    }

    fn cancel_timer(&mut self) {
        self.timer = None;
    }
}

impl Default for CelebrationQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CelebrationQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CelebrationQueue")
            .field("phase", &self.phase())
            .field("current", &self.current.as_ref().map(|c| c.name()))
            .field("pending", &self.pending.len())
            .field("timer", &self.timer)
            .finish()
    }
}
