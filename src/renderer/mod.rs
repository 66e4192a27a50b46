//! Rendering boundary
//!
//! The simulation hands renderers a read-only `FrameSnapshot` once per frame.
//! Drawing never feeds back into gameplay.

pub mod log_renderer;
pub mod snapshot;

pub use log_renderer::LogRenderer;
pub use snapshot::{FrameSnapshot, HoleView, HudView, TimerBarColor, ZombieView};

/// Consumes one snapshot per frame
pub trait Renderer {
    fn render(&mut self, frame: &FrameSnapshot);
}
