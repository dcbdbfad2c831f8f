//! Tier-to-policy mapping
//!
//! Defines how long each tier holds the display slot and whether it is shown
//! at all.

use std::time::Duration;

use crate::Tier;

/// Fixed pause between one celebration ending and the next beginning
pub const DEFAULT_GAP: Duration = Duration::from_millis(300);

/// Display policy for a single tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierPolicy {
    /// How long the celebration occupies the display slot
    pub duration: Duration,
    /// Whether the celebration occupies the display slot at all
    pub renders_visually: bool,
}

impl TierPolicy {
    const HIDDEN: TierPolicy = TierPolicy {
        duration: Duration::ZERO,
        renders_visually: false,
    };

    const fn shown(ms: u64) -> Self {
        Self {
            duration: Duration::from_millis(ms),
            renders_visually: true,
        }
    }
}

/// Default policy for a tier
pub fn policy_for(tier: Tier) -> TierPolicy {
    match tier.get() {
        5 => TierPolicy::shown(6000),
        4 => TierPolicy::shown(5000),
        3 => TierPolicy::shown(4000),
        2 => TierPolicy::shown(3000),
        _ => TierPolicy::HIDDEN,
    }
}

/// Per-tier display durations, overridable from config.
///
/// Tier 1 is always hidden; only tiers 2-5 carry a duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierTable {
    durations: [Duration; 4],
}

impl TierTable {
    /// Build a table from tier 2..=5 durations
    pub fn new(tier2: Duration, tier3: Duration, tier4: Duration, tier5: Duration) -> Self {
        Self {
            durations: [tier2, tier3, tier4, tier5],
        }
    }

    pub fn policy_for(&self, tier: Tier) -> TierPolicy {
        match tier.get() {
            1 => TierPolicy::HIDDEN,
            n => TierPolicy {
                duration: self.durations[n as usize - 2],
                renders_visually: true,
            },
        }
    }
}

impl Default for TierTable {
    fn default() -> Self {
        let duration = |n| policy_for(Tier::new(n).unwrap_or(Tier::MAX)).duration;
        Self::new(duration(2), duration(3), duration(4), duration(5))
    }
}
