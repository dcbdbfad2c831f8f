//! Celebration scheduler
//!
//! Runs a [`CelebrationQueue`] on one tokio task. Enqueues, dismissals and
//! timer expiries are all applied by that task, one at a time, so the queue
//! needs no locking. Observers read [`CelebrationSnapshot`]s from a watch
//! channel.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};
use tracing::debug;

use crate::{QueuedCelebration, UnlockEvent};

use super::queue::CelebrationQueue;

/// Error type for talking to a scheduler
#[derive(Debug, thiserror::Error)]
pub enum SchedulerError {
    #[error("Celebration scheduler has stopped")]
    Closed,
}

/// What the presentation layer gets to see
#[derive(Debug, Clone, PartialEq)]
pub struct CelebrationSnapshot {
    /// Celebration occupying the display slot
    pub current: Option<QueuedCelebration>,
    /// Celebrations still waiting for the slot
    pub pending_count: usize,
    /// Nothing on display, nothing pending, no timer armed
    pub idle: bool,
    /// Number of commands the scheduler has applied
    applied: u64,
}

impl CelebrationSnapshot {
    fn of(queue: &CelebrationQueue, applied: u64) -> Self {
        Self {
            current: queue.current().cloned(),
            pending_count: queue.pending_count(),
            idle: queue.is_idle(),
            applied,
        }
    }
}

enum Command {
    Enqueue(UnlockEvent),
    Dismiss,
    Shutdown,
}

/// Cloneable handle to a running scheduler
#[derive(Clone)]
pub struct CelebrationHandle {
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<CelebrationSnapshot>,
    submitted: Arc<AtomicU64>,
}

impl CelebrationHandle {
    /// Queue an unlock event for celebration
    pub fn enqueue(&self, event: UnlockEvent) -> Result<(), SchedulerError> {
        self.send(Command::Enqueue(event))
    }

    /// Dismiss the celebration on display; a no-op if nothing is showing
    pub fn dismiss(&self) -> Result<(), SchedulerError> {
        self.send(Command::Dismiss)
    }

    /// Ask the scheduler task to stop
    pub fn shutdown(&self) {
        let _ = self.commands.send(Command::Shutdown);
    }

    /// Latest published state
    pub fn snapshot(&self) -> CelebrationSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Receiver notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<CelebrationSnapshot> {
        self.snapshots.clone()
    }

    /// Wait until every command sent so far is applied and the queue has
    /// gone idle
    pub async fn settled(&self) -> Result<(), SchedulerError> {
        let target = self.submitted.load(Ordering::SeqCst);
        let mut snapshots = self.snapshots.clone();
        snapshots
            .wait_for(|snapshot| snapshot.applied >= target && snapshot.idle)
            .await
            .map(|_| ())
            .map_err(|_| SchedulerError::Closed)
    }

    fn send(&self, command: Command) -> Result<(), SchedulerError> {
        self.commands
            .send(command)
            .map_err(|_| SchedulerError::Closed)?;
        self.submitted.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Start driving `queue` on a new tokio task
pub fn spawn(queue: CelebrationQueue) -> (CelebrationHandle, JoinHandle<()>) {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (snapshot_tx, snapshot_rx) = watch::channel(CelebrationSnapshot::of(&queue, 0));

    let task = tokio::spawn(run(queue, command_rx, snapshot_tx));
    let handle = CelebrationHandle {
        commands: command_tx,
        snapshots: snapshot_rx,
        submitted: Arc::new(AtomicU64::new(0)),
    };
    (handle, task)
}

async fn run(
    mut queue: CelebrationQueue,
    mut commands: mpsc::UnboundedReceiver<Command>,
    snapshots: watch::Sender<CelebrationSnapshot>,
) {
    debug!("Celebration scheduler started");
    let mut applied = 0u64;

    loop {
        let timer = queue.next_timer();

        tokio::select! {
            // A dismiss and a hold expiry in the same tick: the dismiss wins
            // and the expiry arrives with a stale token.
            biased;

            command = commands.recv() => {
                let now = Instant::now();
                match command {
                    Some(Command::Enqueue(event)) => {
                        queue.enqueue(event, now);
                    }
                    Some(Command::Dismiss) => {
                        queue.dismiss_current(now);
                    }
                    Some(Command::Shutdown) | None => break,
                }
                applied += 1;
            }
            _ = sleep_until_armed(timer.map(|(_, deadline)| deadline)) => {
                if let Some((token, _)) = timer {
                    queue.on_timer(token, Instant::now());
                }
            }
        }

        snapshots.send_if_modified(|snapshot| {
            let next = CelebrationSnapshot::of(&queue, applied);
            if *snapshot == next {
                return false;
            }
            *snapshot = next;
            true
        });
    }

    debug!(?queue, "Celebration scheduler stopped");
}

async fn sleep_until_armed(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
