//! Presentation dispatch
//!
//! Maps the celebration on display to one rendering mode. No scheduling
//! happens here.

use std::fmt;

use crate::{QueuedCelebration, Tier};

/// Rendering class for the display slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderMode {
    None,
    Light,
    Standard,
    Major,
    Epic,
}

impl RenderMode {
    pub fn for_tier(tier: Tier) -> Self {
        match tier.get() {
            5 => Self::Epic,
            4 => Self::Major,
            3 => Self::Standard,
            2 => Self::Light,
            _ => Self::None,
        }
    }

    /// Mode for whatever currently holds the display slot
    pub fn select(current: Option<&QueuedCelebration>) -> Self {
        current.map_or(Self::None, |c| Self::for_tier(c.tier()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Light => "light",
            Self::Standard => "standard",
            Self::Major => "major",
            Self::Epic => "epic",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
