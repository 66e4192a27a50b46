//! Score, lives, combo and level tracking for one session

use serde::{Deserialize, Serialize};

/// Per-session statistics. Mutated only through the transition methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreState {
    score: u64,
    lives: i32,
    combo: u32,
    max_combo: u32,
    level: u32,
    hit_count: u32,
    miss_count: u32,
    points_per_level: u64,
    combo_bonus_divisor: u32,
}

impl ScoreState {
    pub fn new(starting_lives: i32, points_per_level: u64, combo_bonus_divisor: u32) -> Self {
        debug_assert!(points_per_level > 0 && combo_bonus_divisor > 0);
        Self {
            score: 0,
            lives: starting_lives,
            combo: 0,
            max_combo: 0,
            level: 1,
            hit_count: 0,
            miss_count: 0,
            points_per_level,
            combo_bonus_divisor,
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn lives(&self) -> i32 {
        self.lives
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn max_combo(&self) -> u32 {
        self.max_combo
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn hit_count(&self) -> u32 {
        self.hit_count
    }

    pub fn miss_count(&self) -> u32 {
        self.miss_count
    }

    /// Add points and advance the level if a threshold was crossed
    pub fn add_score(&mut self, points: u64) {
        self.score += points;
        let new_level = (self.score / self.points_per_level) as u32 + 1;
        if new_level > self.level {
            self.level = new_level;
        }
    }

    pub fn register_hit(&mut self) {
        self.hit_count += 1;
    }

    pub fn register_miss(&mut self) {
        self.miss_count += 1;
    }

    pub fn increment_combo(&mut self) {
        self.combo += 1;
        self.max_combo = self.max_combo.max(self.combo);
    }

    pub fn break_combo(&mut self) {
        self.combo = 0;
    }

    /// Lose one life. Returns true once the player is out of lives.
    pub fn lose_life(&mut self) -> bool {
        self.lives -= 1;
        self.is_out_of_lives()
    }

    pub fn is_out_of_lives(&self) -> bool {
        self.lives <= 0
    }

    /// Bonus points earned by the current combo
    pub fn combo_bonus(&self) -> u64 {
        (self.combo / self.combo_bonus_divisor) as u64
    }

    /// Accuracy in percent; 0 before any hit or miss
    pub fn hit_ratio(&self) -> f32 {
        let total = self.hit_count + self.miss_count;
        if total == 0 {
            return 0.0;
        }
        self.hit_count as f32 / total as f32 * 100.0
    }
}
