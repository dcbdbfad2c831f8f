//! Achievement celebrations
//!
//! Unlock events arrive faster than they can be shown. This module queues
//! them, decides the display order and paces them through a single display
//! slot.
//!
//! # Architecture
//!
//! ```text
//! backend ──► UnlockFeed ──► CelebrationHandle ──► scheduler task
//!                 │                                   │ owns
//!                 ▼                                   ▼
//!          other subscribers                 CelebrationQueue
//!          (badge counters)                   pending ─► current
//!                                                     │
//!                                  watch::Receiver ◄──┘ CelebrationSnapshot
//!                                        │
//!                                        ▼
//!                                   RenderMode::select
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let (handle, _task) = scheduler::spawn(CelebrationQueue::new());
//! let feed = UnlockFeed::new();
//! let _subscription = intake::connect(&feed, handle.clone());
//!
//! feed.publish(&event);
//! let mode = RenderMode::select(handle.snapshot().current.as_ref());
//! ```
//!
//! The pending queue is unbounded on purpose. A flooding event source gets
//! every celebration shown eventually; there is no backpressure.

pub mod dispatch;
pub mod intake;
mod pending;
pub mod policy;
mod queue;
pub mod scheduler;
pub mod sound;

pub use dispatch::RenderMode;
pub use intake::{IntakeError, Subscription, UnlockFeed, connect, read_json_lines};
pub use policy::{DEFAULT_GAP, TierPolicy, TierTable, policy_for};
pub use queue::{CelebrationQueue, Phase, TimerKind, TimerToken};
pub use scheduler::{CelebrationHandle, CelebrationSnapshot, SchedulerError, spawn};
pub use sound::{RecordingSound, Silent, SoundError, SoundPlayer, TerminalBell};
