//! Player preferences
//!
//! Kept separate from `Tuning`: settings change how the game is presented,
//! tuning changes how it plays.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    pub muted: bool,

    // === Display ===
    /// Start with the hitbox overlay enabled
    pub show_hitboxes: bool,
    /// Frame loop rate (Hz)
    pub target_fps: u32,
    /// Log a HUD line this often while playing (ms)
    pub hud_interval_ms: u64,

    // === Demo mode ===
    /// Chance the autoplayer clicks on target (0.0 - 1.0)
    pub demo_accuracy: f32,
    /// Delay before the autoplayer reacts to a fully risen zombie (ms)
    pub demo_reaction_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.4,
            muted: false,

            show_hitboxes: false,
            target_fps: crate::consts::TARGET_FPS,
            hud_interval_ms: 1000,

            demo_accuracy: 0.85,
            demo_reaction_ms: 250,
        }
    }
}

impl Settings {
    /// Milliseconds per frame at the target rate
    pub fn frame_duration_ms(&self) -> u64 {
        1000 / self.target_fps.max(1) as u64
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Settings file {} unreadable ({}), using defaults", path.display(), e);
                return Self::default();
            }
        };

        match serde_json::from_str::<Settings>(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings.sanitized()
            }
            Err(e) => {
                log::warn!("Malformed settings in {} ({}), using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Clamp out-of-range values
    pub fn sanitized(mut self) -> Self {
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self.music_volume = self.music_volume.clamp(0.0, 1.0);
        self.demo_accuracy = self.demo_accuracy.clamp(0.0, 1.0);
        self.target_fps = self.target_fps.clamp(1, 240);
        self
    }
}
