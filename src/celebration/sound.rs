//! Celebration sound trigger
//!
//! The queue fires a sound when a tier 3+ celebration starts. Playback is
//! fire-and-forget: a failing player is logged and otherwise ignored.

use std::io::Write;
use std::sync::Mutex;

use crate::Tier;

/// Lowest tier that gets a sound
pub const MIN_SOUND_TIER: u8 = 3;

/// Error type for sound playback
#[derive(Debug, thiserror::Error)]
pub enum SoundError {
    #[error("Sound playback blocked: {0}")]
    Blocked(String),

    #[error("Failed to write sound output: {0}")]
    Io(#[from] std::io::Error),
}

/// Plays the sound for a tier
pub trait SoundPlayer: Send + Sync {
    fn play(&self, tier: Tier) -> Result<(), SoundError>;
}

/// Never makes a sound
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl SoundPlayer for Silent {
    fn play(&self, _tier: Tier) -> Result<(), SoundError> {
        Ok(())
    }
}

/// Rings the terminal bell, once per tier step above the sound threshold
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalBell;

impl SoundPlayer for TerminalBell {
    fn play(&self, tier: Tier) -> Result<(), SoundError> {
        let rings = tier.get().saturating_sub(MIN_SOUND_TIER - 1) as usize;
        let mut stderr = std::io::stderr().lock();
        stderr.write_all("\x07".repeat(rings).as_bytes())?;
        stderr.flush()?;
        Ok(())
    }
}

/// Remembers every tier it was asked to play
#[derive(Debug, Default)]
pub struct RecordingSound {
    played: Mutex<Vec<Tier>>,
}

impl RecordingSound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn played(&self) -> Vec<Tier> {
        self.played
            .lock()
            .map(|played| played.clone())
            .unwrap_or_default()
    }
}

impl SoundPlayer for RecordingSound {
    fn play(&self, tier: Tier) -> Result<(), SoundError> {
        if let Ok(mut played) = self.played.lock() {
            played.push(tier);
        }
        Ok(())
    }
}

/// Whether a tier gets a sound at all
pub fn has_sound(tier: Tier) -> bool {
    tier.get() >= MIN_SOUND_TIER
}
