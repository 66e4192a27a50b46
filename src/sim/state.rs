//! Session state machine values and the events a tick produces

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Top-level session state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionState {
    /// Title screen, waiting for start
    #[default]
    Menu,
    /// Active gameplay
    Play,
    /// Game is paused; game time is frozen
    Pause,
    /// Out of lives, waiting for restart
    GameOver,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Menu => "MENU",
            SessionState::Play => "PLAY",
            SessionState::Pause => "PAUSE",
            SessionState::GameOver => "GAMEOVER",
        }
    }
}

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Start,
    PauseResume,
    Restart,
    ToggleDebug,
    Quit,
}

/// Pointer buttons; only `Primary` resolves hits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// One discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Window closed
    Quit,
    KeyPress(Key),
    PointerDown { button: PointerButton, pos: Vec2 },
}

impl InputEvent {
    /// Primary click at `pos`
    pub fn click(pos: Vec2) -> Self {
        InputEvent::PointerDown {
            button: PointerButton::Primary,
            pos,
        }
    }
}

/// Things that happened during event handling or a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A fresh session began (from menu or restart)
    SessionStarted,
    /// Background music should (re)start
    MusicStart,
    Paused,
    Resumed,
    ZombieSpawned { hole: usize },
    ZombieHit { hole: usize, points: u64 },
    /// Click with an active combo that hit nothing
    ClickMissed,
    /// Zombies timed out this tick
    ZombiesEscaped { count: u32 },
    LevelUp { level: u32 },
    GameOver { score: u64 },
    HitboxesToggled { visible: bool },
    Quit,
}
