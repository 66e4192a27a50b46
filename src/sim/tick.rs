//! Session controller and per-frame simulation tick
//!
//! All timestamps handed to the controller are wall-clock milliseconds from
//! the platform clock. Internally everything runs on game time, which is the
//! wall clock minus the accumulated pause time.

use glam::Vec2;

use super::difficulty::{Difficulty, difficulty};
use super::grid::HoleGrid;
use super::rng::{RandomSource, SeededRandom};
use super::score::ScoreState;
use super::state::{GameEvent, InputEvent, Key, PointerButton, SessionState};
use super::zombie::{HitOutcome, SpawnOutcome, ZombieField};
use crate::tuning::Tuning;

/// Owns all session state and advances it one frame at a time
#[derive(Debug)]
pub struct GameController<R: RandomSource = SeededRandom> {
    tuning: Tuning,
    grid: HoleGrid,
    state: SessionState,
    score: ScoreState,
    field: ZombieField,
    rng: R,
    /// Game time of the last spawn attempt
    last_spawn_attempt: u64,
    /// Wall-clock time spent paused, summed over completed pauses
    total_pause_time: u64,
    /// Wall-clock time the current pause began
    pause_started_at: u64,
    show_hitboxes: bool,
    running: bool,
    events: Vec<GameEvent>,
}

impl<R: RandomSource> GameController<R> {
    /// Controller on the reference hole layout, sitting in the menu
    pub fn new(tuning: Tuning, rng: R) -> Self {
        let grid = HoleGrid::staggered(&tuning);
        Self::with_grid(tuning, grid, rng)
    }

    pub fn with_grid(tuning: Tuning, grid: HoleGrid, rng: R) -> Self {
        let score = fresh_score(&tuning);
        let field = ZombieField::new(grid.len(), tuning.hit_display_duration_ms);
        Self {
            tuning,
            grid,
            state: SessionState::Menu,
            score,
            field,
            rng,
            last_spawn_attempt: 0,
            total_pause_time: 0,
            pause_started_at: 0,
            show_hitboxes: false,
            running: true,
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn field(&self) -> &ZombieField {
        &self.field
    }

    pub fn grid(&self) -> &HoleGrid {
        &self.grid
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn show_hitboxes(&self) -> bool {
        self.show_hitboxes
    }

    pub fn set_show_hitboxes(&mut self, visible: bool) {
        self.show_hitboxes = visible;
    }

    /// False once a quit was requested
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Difficulty for the current level
    pub fn difficulty(&self) -> Difficulty {
        difficulty(&self.tuning, self.score.level())
    }

    /// Game time for a wall-clock instant. Frozen while paused.
    pub fn game_time(&self, now: u64) -> u64 {
        let wall = if self.state == SessionState::Pause {
            self.pause_started_at
        } else {
            now
        };
        wall.saturating_sub(self.total_pause_time)
    }

    /// Take the events produced since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Apply one input event. Events that make no sense in the current
    /// state are ignored.
    pub fn handle_event(&mut self, event: InputEvent, now: u64) {
        match event {
            InputEvent::Quit | InputEvent::KeyPress(Key::Quit) => self.quit(),
            InputEvent::KeyPress(key) => self.handle_key(key, now),
            InputEvent::PointerDown { button, pos } => {
                if button == PointerButton::Primary && self.state == SessionState::Play {
                    self.resolve_click(pos);
                }
            }
        }
    }

    fn handle_key(&mut self, key: Key, now: u64) {
        match (key, self.state) {
            (Key::Start, SessionState::Menu) => self.start_session(now),
            (Key::PauseResume, SessionState::Play) => {
                self.pause_started_at = now;
                self.state = SessionState::Pause;
                log::info!("Paused at game time {}", self.game_time(now));
                self.events.push(GameEvent::Paused);
            }
            (Key::PauseResume, SessionState::Pause) => {
                let paused_for = now.saturating_sub(self.pause_started_at);
                self.total_pause_time += paused_for;
                self.state = SessionState::Play;
                log::info!("Resumed after {} ms", paused_for);
                self.events.push(GameEvent::Resumed);
            }
            (Key::Restart, SessionState::GameOver) => {
                self.start_session(now);
                self.events.push(GameEvent::MusicStart);
            }
            (Key::ToggleDebug, _) => {
                self.show_hitboxes = !self.show_hitboxes;
                log::info!("Hitboxes: {}", if self.show_hitboxes { "ON" } else { "OFF" });
                self.events.push(GameEvent::HitboxesToggled {
                    visible: self.show_hitboxes,
                });
            }
            _ => {}
        }
    }

    fn quit(&mut self) {
        if self.running {
            log::info!("Quit requested in {}", self.state.as_str());
            self.running = false;
            self.events.push(GameEvent::Quit);
        }
    }

    /// Begin a fresh session from the menu or after game over
    fn start_session(&mut self, now: u64) {
        self.score = fresh_score(&self.tuning);
        self.field.reset();
        self.total_pause_time = 0;
        self.state = SessionState::Play;
        self.last_spawn_attempt = self.game_time(now);
        log::info!("Session started (lives: {})", self.score.lives());
        self.events.push(GameEvent::SessionStarted);
    }

    /// Advance the simulation to `now`. Does nothing outside of play.
    pub fn update(&mut self, now: u64) {
        if self.state != SessionState::Play {
            return;
        }

        let difficulty = self.difficulty();
        let game_now = self.game_time(now);

        self.attempt_spawn(game_now, &difficulty);

        let timeouts = self.field.sweep(game_now, difficulty.visible_duration_ms);
        if timeouts > 0 {
            for _ in 0..timeouts {
                self.score.lose_life();
                self.score.register_miss();
            }
            self.score.break_combo();
            log::debug!("{} zombie(s) escaped, lives left: {}", timeouts, self.score.lives());
            self.events.push(GameEvent::ZombiesEscaped { count: timeouts });

            if self.score.is_out_of_lives() {
                self.state = SessionState::GameOver;
                log::info!(
                    "Game over: score {}, best combo {}, accuracy {:.1}%",
                    self.score.score(),
                    self.score.max_combo(),
                    self.score.hit_ratio()
                );
                self.events.push(GameEvent::GameOver {
                    score: self.score.score(),
                });
            }
        }
    }

    fn attempt_spawn(&mut self, game_now: u64, difficulty: &Difficulty) {
        if game_now.saturating_sub(self.last_spawn_attempt) <= difficulty.spawn_interval_ms {
            return;
        }
        self.last_spawn_attempt = game_now;

        if self.rng.next_unit() >= difficulty.spawn_probability {
            return;
        }

        let available = self.field.available_holes();
        if available.is_empty() {
            return;
        }

        let hole = self.rng.choose(&available);
        if self.field.spawn(hole, game_now) == SpawnOutcome::Spawned {
            log::debug!("Zombie spawned in hole {} at {}", hole, game_now);
            self.events.push(GameEvent::ZombieSpawned { hole });
        }
    }

    /// Resolve a primary click. At most one zombie is hit per click.
    fn resolve_click(&mut self, pos: Vec2) {
        let field = &self.field;
        let target = self
            .grid
            .holes_at(pos)
            .find(|&i| field.get(i).is_some_and(|z| !z.is_hit()));

        match target {
            Some(hole) => self.register_hit(hole),
            None if self.score.combo() > 0 => {
                self.score.break_combo();
                self.score.register_miss();
                self.events.push(GameEvent::ClickMissed);
            }
            None => {}
        }
    }

    fn register_hit(&mut self, hole: usize) {
        if self.field.hit(hole) != HitOutcome::Hit {
            return;
        }

        let level_before = self.score.level();
        let points = self.tuning.points_per_hit + self.score.combo_bonus();
        self.score.add_score(points);
        self.score.increment_combo();
        self.score.register_hit();
        log::debug!(
            "Hit hole {} for {} points (combo {})",
            hole,
            points,
            self.score.combo()
        );
        self.events.push(GameEvent::ZombieHit { hole, points });

        if self.score.level() > level_before {
            log::info!("Level up: {}", self.score.level());
            self.events.push(GameEvent::LevelUp {
                level: self.score.level(),
            });
        }
    }
}

fn fresh_score(tuning: &Tuning) -> ScoreState {
    ScoreState::new(
        tuning.starting_lives,
        tuning.points_per_level,
        tuning.combo_bonus_divisor,
    )
}
