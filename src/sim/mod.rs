//! Game simulation module
//!
//! All gameplay logic lives here. This module must stay free of I/O:
//! - Time comes in as plain millisecond values
//! - Randomness only through `RandomSource`
//! - Stable iteration order (by hole index)
//! - No rendering, audio or platform dependencies

pub mod difficulty;
pub mod grid;
pub mod rng;
pub mod score;
pub mod state;
pub mod tick;
pub mod zombie;

pub use difficulty::{Difficulty, difficulty};
pub use grid::{Hitbox, HoleGrid};
pub use rng::{RandomSource, SeededRandom};
pub use score::ScoreState;
pub use state::{GameEvent, InputEvent, Key, PointerButton, SessionState};
pub use tick::GameController;
pub use zombie::{HitOutcome, SpawnOutcome, Zombie, ZombieField};
