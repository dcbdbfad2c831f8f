//! Configuration loading and management

mod settings;

pub use settings::{CelebrationSettings, SoundSettings};

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::celebration::{CelebrationQueue, Silent, SoundPlayer, TerminalBell};

/// Config file location relative to a project directory
pub const CONFIG_PATH: &str = ".fanfare/config.toml";

/// Legacy single-file location
const LEGACY_CONFIG_PATH: &str = "fanfare.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Pacing of celebrations
    #[serde(default)]
    pub celebration: CelebrationSettings,

    /// Celebration sounds
    #[serde(default)]
    pub sound: SoundSettings,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from a directory
    /// Looks for: .fanfare/config.toml (preferred), fanfare.toml (legacy),
    /// then ~/.fanfare/config.toml
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let project_path = dir.join(CONFIG_PATH);
        if project_path.exists() {
            return Self::from_file(&project_path);
        }

        let legacy_path = dir.join(LEGACY_CONFIG_PATH);
        if legacy_path.exists() {
            return Self::from_file(&legacy_path);
        }

        if let Some(global_path) = Self::global_path().filter(|p| p.exists()) {
            return Self::from_file(&global_path);
        }

        Ok(Self::default())
    }

    /// Per-user config file (~/.fanfare/config.toml)
    pub fn global_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_PATH))
    }

    /// Sound player selected by the sound settings
    pub fn sound_player(&self) -> Arc<dyn SoundPlayer> {
        if self.sound.enabled && self.sound.bell {
            Arc::new(TerminalBell)
        } else {
            Arc::new(Silent)
        }
    }

    /// A celebration queue configured from these settings
    pub fn build_queue(&self) -> CelebrationQueue {
        CelebrationQueue::new()
            .with_table(self.celebration.tier_table())
            .with_gap(self.celebration.gap())
            .with_sound(self.sound_player())
    }
}
