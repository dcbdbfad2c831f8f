//! Settings configuration types

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::celebration::{DEFAULT_GAP, TierTable, policy_for};
use crate::Tier;

/// Celebration pacing settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CelebrationSettings {
    /// Pause between two celebrations in milliseconds
    /// Default: 300
    #[serde(default = "default_gap_ms")]
    pub gap_ms: u64,

    /// Display duration for tier 2 (light) celebrations
    #[serde(default = "default_tier2_ms")]
    pub tier2_ms: u64,

    /// Display duration for tier 3 (standard) celebrations
    #[serde(default = "default_tier3_ms")]
    pub tier3_ms: u64,

    /// Display duration for tier 4 (major) celebrations
    #[serde(default = "default_tier4_ms")]
    pub tier4_ms: u64,

    /// Display duration for tier 5 (epic) celebrations
    #[serde(default = "default_tier5_ms")]
    pub tier5_ms: u64,
}

fn default_gap_ms() -> u64 {
    DEFAULT_GAP.as_millis() as u64
}

fn default_duration_ms(tier: u8) -> u64 {
    Tier::new(tier)
        .map(|tier| policy_for(tier).duration.as_millis() as u64)
        .unwrap_or_default()
}

fn default_tier2_ms() -> u64 {
    default_duration_ms(2)
}

fn default_tier3_ms() -> u64 {
    default_duration_ms(3)
}

fn default_tier4_ms() -> u64 {
    default_duration_ms(4)
}

fn default_tier5_ms() -> u64 {
    default_duration_ms(5)
}

impl Default for CelebrationSettings {
    fn default() -> Self {
        Self {
            gap_ms: default_gap_ms(),
            tier2_ms: default_tier2_ms(),
            tier3_ms: default_tier3_ms(),
            tier4_ms: default_tier4_ms(),
            tier5_ms: default_tier5_ms(),
        }
    }
}

impl CelebrationSettings {
    pub fn gap(&self) -> Duration {
        Duration::from_millis(self.gap_ms)
    }

    pub fn tier_table(&self) -> TierTable {
        TierTable::new(
            Duration::from_millis(self.tier2_ms),
            Duration::from_millis(self.tier3_ms),
            Duration::from_millis(self.tier4_ms),
            Duration::from_millis(self.tier5_ms),
        )
    }
}

/// Celebration sound settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundSettings {
    /// Play a sound when a tier 3+ celebration starts
    #[serde(default = "default_sound_enabled")]
    pub enabled: bool,

    /// Use the terminal bell as the sound (the only built-in player)
    #[serde(default = "default_bell")]
    pub bell: bool,
}

fn default_sound_enabled() -> bool {
    true
}

fn default_bell() -> bool {
    true
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self {
            enabled: default_sound_enabled(),
            bell: default_bell(),
        }
    }
}
