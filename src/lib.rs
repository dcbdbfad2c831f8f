//! fanfare - achievement unlock celebrations
//!
//! fanfare takes "achievement unlocked" events from an achievement backend and
//! turns them into celebrations the user actually gets to see. Events can
//! arrive in bursts (a backfill after reconnecting, several milestones at
//! once); fanfare queues them, orders them by tier and shows them one at a
//! time, each for as long as its tier deserves.
//!
//! ## Tiers
//!
//! Every event carries a tier from 1 to 5:
//!
//! 1. **Tier 1**: counted, never shown
//! 2. **Tiers 2-4**: shown in arrival order, longer and louder as the tier rises
//! 3. **Tier 5**: shown ahead of everything still waiting
//!
//! Rendering and the backend itself live outside this crate.

pub mod celebration;
pub mod config;
pub mod domain;

pub use domain::*;
