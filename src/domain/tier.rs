//! Celebration tiers
//!
//! A tier classifies how loudly an unlock is celebrated. The event source
//! assigns it; the celebration core only reads it.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Celebration importance, always within `1..=5`.
///
/// Higher is rarer. Tier 1 never occupies the display slot, tier 5 jumps
/// ahead of everything still waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Tier(u8);

impl Tier {
    pub const MIN: Tier = Tier(1);
    pub const MAX: Tier = Tier(5);
    /// The tier that overtakes everything still pending
    pub const LEGENDARY: Tier = Tier::MAX;

    /// Create a tier, rejecting values outside `1..=5`
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN.0..=Self::MAX.0)
            .contains(&value)
            .then_some(Self(value))
    }

    /// Create a tier from an untrusted value, clamping into `1..=5`.
    ///
    /// An out-of-range value is a contract violation by the event source; it
    /// is logged and the nearest valid tier is used instead.
    pub fn clamped(value: i64) -> Self {
        let clamped = value.clamp(Self::MIN.0 as i64, Self::MAX.0 as i64) as u8;
        if clamped as i64 != value {
            warn!(raw = value, clamped, "Tier out of range, clamping");
        }
        Self(clamped)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn is_legendary(self) -> bool {
        self == Self::LEGENDARY
    }

    /// All tiers from lowest to highest
    pub fn all() -> impl Iterator<Item = Tier> {
        (Self::MIN.0..=Self::MAX.0).map(Tier)
    }
}

impl From<i64> for Tier {
    fn from(value: i64) -> Self {
        Self::clamped(value)
    }
}

impl From<Tier> for u8 {
    fn from(tier: Tier) -> Self {
        tier.0
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tier {}", self.0)
    }
}
