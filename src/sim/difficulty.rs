//! Level-driven difficulty curve

use crate::tuning::Tuning;

/// Difficulty parameters for one level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    /// Minimum time between spawn attempts (ms)
    pub spawn_interval_ms: u64,
    /// How long an unhit zombie stays up before escaping (ms)
    pub visible_duration_ms: u64,
    /// Chance that a spawn attempt produces a zombie
    pub spawn_probability: f32,
}

/// Compute the difficulty for `level`.
///
/// Intervals shrink linearly and probability grows linearly, each clamped to
/// its floor/ceiling from `tuning`.
pub fn difficulty(tuning: &Tuning, level: u32) -> Difficulty {
    let level_u64 = level as u64;

    let spawn_interval_ms = tuning
        .base_spawn_interval_ms
        .saturating_sub(level_u64.saturating_mul(tuning.spawn_interval_step_ms))
        .max(tuning.min_spawn_interval_ms);

    let visible_duration_ms = tuning
        .base_visible_duration_ms
        .saturating_sub(level_u64.saturating_mul(tuning.visible_duration_step_ms))
        .max(tuning.min_visible_duration_ms);

    let spawn_probability = (tuning.base_spawn_probability
        + level as f32 * tuning.spawn_probability_step)
        .min(tuning.max_spawn_probability);

    Difficulty {
        spawn_interval_ms,
        visible_duration_ms,
        spawn_probability,
    }
}
