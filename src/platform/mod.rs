//! Platform abstraction layer
//!
//! Handles the pieces the simulation reaches only through traits:
//! - Time/ticks
//! - Input events

pub mod input;
pub mod time;

pub use input::{AutoPlayer, InputSource, ScriptedInput};
pub use time::{Clock, ManualClock, SystemClock};
