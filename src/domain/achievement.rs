//! Achievement metadata carried on unlock events
//!
//! The celebration core never interprets these fields; they travel with the
//! celebration so a renderer can show them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Rarity category assigned by the achievement backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Uncommon => "uncommon",
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Common => "Common",
            Self::Uncommon => "Uncommon",
            Self::Rare => "Rare",
            Self::Epic => "Epic",
            Self::Legendary => "Legendary",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity and display metadata of an unlocked achievement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementInfo {
    /// Backend achievement ID (e.g., "streak_starter")
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Icon glyph, usually a single emoji
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub rarity: Rarity,
    #[serde(default)]
    pub points: u32,
    /// Category tag used for grouping (e.g., "streak", "milestone")
    #[serde(default)]
    pub category: String,
}

impl AchievementInfo {
    /// Minimal metadata with just an ID and a display name
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            icon: String::new(),
            rarity: Rarity::default(),
            points: 0,
            category: String::new(),
        }
    }
}
