//! Whack-a-Zombie - an arcade reaction game
//!
//! Core modules:
//! - `sim`: Game simulation (zombie lifecycle, scoring, difficulty, session state machine)
//! - `platform`: Clock and input abstraction
//! - `renderer`: Read-only frame snapshots and a headless renderer
//! - `audio`: Sound effect dispatch
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences
//! - `game_loop`: Fixed-rate frame loop wiring the above together

pub mod audio;
pub mod game_loop;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game_loop::GameLoop;
pub use settings::Settings;
pub use tuning::{Tuning, TuningError};

/// Fixed layout constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const WIDTH: f32 = 1280.0;
    pub const HEIGHT: f32 = 720.0;

    /// Number of holes in the reference layout (7 + 6 + 7)
    pub const HOLE_COUNT: usize = 20;

    /// Row baselines, top to bottom
    pub const ROW_Y_POSITIONS: [f32; 3] = [210.0, 410.0, 610.0];
    /// Horizontal spacing unit; outer rows sit on odd multiples, the middle row on even ones
    pub const COLUMN_SPACING: f32 = 90.0;

    /// Default frame rate of the loop (Hz)
    pub const TARGET_FPS: u32 = 60;
}
