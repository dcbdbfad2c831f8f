//! Unlock events as emitted by the achievement backend

use std::fmt;

use serde::{Deserialize, Serialize};

use super::achievement::AchievementInfo;
use super::tier::Tier;

/// Experience bracket of the user at the time of the unlock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserLevel {
    #[default]
    New,
    Beginner,
    Intermediate,
    Advanced,
    Master,
}

impl UserLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Master => "master",
        }
    }
}

impl fmt::Display for UserLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single "achievement unlocked" event.
///
/// Everything except `tier` is passed through untouched. The tier is clamped
/// into `1..=5` when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockEvent {
    pub achievement: AchievementInfo,
    pub tier: Tier,
    #[serde(default)]
    pub is_first_in_category: bool,
    #[serde(default)]
    pub total_unlocked_so_far: u32,
    #[serde(default)]
    pub user_level: UserLevel,
}

impl UnlockEvent {
    /// Event with default flags, mostly useful for tests and demos
    pub fn new(achievement: AchievementInfo, tier: Tier) -> Self {
        Self {
            achievement,
            tier,
            is_first_in_category: false,
            total_unlocked_so_far: 0,
            user_level: UserLevel::default(),
        }
    }
}
