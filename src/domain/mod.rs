//! Core domain types for fanfare

mod achievement;
mod celebration;
mod tier;
mod unlock;

pub use achievement::{AchievementInfo, Rarity};
pub use celebration::{CelebrationId, QueuedCelebration};
pub use tier::Tier;
pub use unlock::{UnlockEvent, UserLevel};
