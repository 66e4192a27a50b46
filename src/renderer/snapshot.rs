//! Read-only view of one frame handed to renderers

use glam::Vec2;

use crate::sim::{GameController, Hitbox, RandomSource, SessionState, Zombie};

/// Lives at or below this are drawn as a warning
pub const LOW_LIVES: i32 = 2;

/// Timer bar colour bands by remaining time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerBarColor {
    Green,
    Yellow,
    Red,
}

impl TimerBarColor {
    pub fn for_ratio(ratio: f32) -> Self {
        if ratio > 0.5 {
            TimerBarColor::Green
        } else if ratio > 0.25 {
            TimerBarColor::Yellow
        } else {
            TimerBarColor::Red
        }
    }
}

/// Zombie as it should be drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZombieView {
    /// Squashed sprite instead of the rising one
    pub is_hit: bool,
    /// Rows of the sprite visible above the hole
    pub visible_height: u32,
    /// Share of the visibility window left
    pub time_remaining: f32,
    /// Timer bar, shown only once the zombie has mostly emerged
    pub timer_bar: Option<TimerBarColor>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoleView {
    pub index: usize,
    pub position: Vec2,
    pub hitbox: Hitbox,
    pub zombie: Option<ZombieView>,
}

/// Score panel numbers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudView {
    pub score: u64,
    pub lives: i32,
    pub combo: u32,
    pub max_combo: u32,
    pub level: u32,
    pub hits: u32,
    pub misses: u32,
    /// Hit ratio in percent
    pub accuracy: f32,
    /// Combo counter is visible
    pub show_combo: bool,
    pub lives_low: bool,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub state: SessionState,
    pub game_time: u64,
    pub holes: Vec<HoleView>,
    pub hud: HudView,
    pub show_hitboxes: bool,
}

impl FrameSnapshot {
    /// Capture the controller state at wall-clock time `now`
    pub fn capture<R: RandomSource>(game: &GameController<R>, now: u64) -> Self {
        let tuning = game.tuning();
        let game_time = game.game_time(now);
        let visible_duration = game.difficulty().visible_duration_ms;

        let zombie_view = |zombie: &Zombie| {
            let rise = tuning.zombie_rise_duration_ms;
            let time_remaining = zombie.time_remaining_ratio(game_time, visible_duration);
            let timer_bar = (!zombie.is_hit()
                && zombie.is_fully_risen(game_time, rise, tuning.zombie_height))
            .then(|| TimerBarColor::for_ratio(time_remaining));
            ZombieView {
                is_hit: zombie.is_hit(),
                visible_height: zombie.visible_height(game_time, rise, tuning.zombie_height),
                time_remaining,
                timer_bar,
            }
        };

        let grid = game.grid();
        let holes = (0..grid.len())
            .map(|index| HoleView {
                index,
                position: grid.position(index),
                hitbox: grid.hitbox(index),
                zombie: game.field().get(index).map(&zombie_view),
            })
            .collect();

        let score = game.score();
        let hud = HudView {
            score: score.score(),
            lives: score.lives(),
            combo: score.combo(),
            max_combo: score.max_combo(),
            level: score.level(),
            hits: score.hit_count(),
            misses: score.miss_count(),
            accuracy: score.hit_ratio(),
            show_combo: score.combo() >= tuning.combo_display_threshold,
            lives_low: score.lives() <= LOW_LIVES,
        };

        Self {
            state: game.state(),
            game_time,
            holes,
            hud,
            show_hitboxes: game.show_hitboxes(),
        }
    }

    /// Holes with a zombie that can still be hit
    pub fn targets(&self) -> impl Iterator<Item = &HoleView> {
        self.holes
            .iter()
            .filter(|h| h.zombie.is_some_and(|z| !z.is_hit))
    }
}
