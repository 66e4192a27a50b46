//! Data-driven game balance
//!
//! Every gameplay constant lives here so a JSON file can rebalance the game
//! without a rebuild. Missing fields fall back to the reference values.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to load or validate a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed tuning json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Game balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Difficulty ===
    /// Time between spawn attempts at level 0 (ms)
    pub base_spawn_interval_ms: u64,
    /// Spawn interval reduction per level (ms)
    pub spawn_interval_step_ms: u64,
    /// Fastest spawn rate (ms)
    pub min_spawn_interval_ms: u64,
    /// How long an unhit zombie stays up at level 0 (ms)
    pub base_visible_duration_ms: u64,
    /// Visibility reduction per level (ms)
    pub visible_duration_step_ms: u64,
    /// Shortest visibility (ms)
    pub min_visible_duration_ms: u64,
    /// Probability that a spawn attempt succeeds at level 0
    pub base_spawn_probability: f32,
    /// Probability increase per level
    pub spawn_probability_step: f32,
    /// Probability ceiling
    pub max_spawn_probability: f32,

    // === Scoring ===
    pub points_per_hit: u64,
    /// Extra points per hit = combo / divisor
    pub combo_bonus_divisor: u32,
    /// Score needed per level
    pub points_per_level: u64,
    pub starting_lives: i32,

    // === Zombie timing ===
    /// Time for a zombie to fully emerge (ms)
    pub zombie_rise_duration_ms: u64,
    /// How long a squashed zombie stays on screen (ms)
    pub hit_display_duration_ms: u64,

    // === Sprite / hitbox ===
    pub zombie_width: f32,
    pub zombie_height: f32,
    /// Extra width on the left side of each hitbox
    pub hitbox_padding: f32,

    // === HUD ===
    /// Minimum combo before the combo counter is shown
    pub combo_display_threshold: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_spawn_interval_ms: 1000,
            spawn_interval_step_ms: 65,
            min_spawn_interval_ms: 500,
            base_visible_duration_ms: 950,
            visible_duration_step_ms: 55,
            min_visible_duration_ms: 500,
            base_spawn_probability: 0.60,
            spawn_probability_step: 0.06,
            max_spawn_probability: 0.92,

            points_per_hit: 10,
            combo_bonus_divisor: 3,
            points_per_level: 40,
            starting_lives: 5,

            zombie_rise_duration_ms: 300,
            hit_display_duration_ms: 2000,

            zombie_width: 80.0,
            zombie_height: 128.0,
            hitbox_padding: 10.0,

            combo_display_threshold: 3,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON string
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let invalid = |field, reason| Err(TuningError::Invalid { field, reason });

        if self.points_per_level == 0 {
            return invalid("points_per_level", "must be positive");
        }
        if self.combo_bonus_divisor == 0 {
            return invalid("combo_bonus_divisor", "must be positive");
        }
        if self.starting_lives <= 0 {
            return invalid("starting_lives", "must be positive");
        }
        if self.zombie_rise_duration_ms == 0 {
            return invalid("zombie_rise_duration_ms", "must be positive");
        }
        if self.min_visible_duration_ms == 0 {
            return invalid("min_visible_duration_ms", "must be positive");
        }
        for (field, p) in [
            ("base_spawn_probability", self.base_spawn_probability),
            ("max_spawn_probability", self.max_spawn_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return invalid(field, "must be within [0, 1]");
            }
        }
        if self.zombie_width <= 0.0 || self.zombie_height <= 0.0 {
            return invalid("zombie_width", "sprite dimensions must be positive");
        }
        Ok(())
    }
}
