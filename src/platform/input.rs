//! Input sources
//!
//! An input source is polled once per frame and returns the events that
//! happened since the previous poll, in order. It may look at the last
//! rendered frame, the way a player looks at the screen.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{HEIGHT, WIDTH};
use crate::renderer::FrameSnapshot;
use crate::settings::Settings;
use crate::sim::{InputEvent, Key, SessionState};

/// Produces input events once per frame
pub trait InputSource {
    fn poll(&mut self, now: u64, frame: &FrameSnapshot) -> Vec<InputEvent>;
}

/// Replays a fixed list of timed events
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    /// (wall-clock ms, event), sorted by time
    events: Vec<(u64, InputEvent)>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(mut events: Vec<(u64, InputEvent)>) -> Self {
        // Stable sort keeps same-time events in script order
        events.sort_by_key(|(at, _)| *at);
        Self { events, cursor: 0 }
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.events.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, now: u64, _frame: &FrameSnapshot) -> Vec<InputEvent> {
        let due = self.events[self.cursor..]
            .iter()
            .take_while(|(at, _)| *at <= now)
            .map(|(_, event)| *event)
            .collect::<Vec<_>>();
        self.cursor += due.len();
        due
    }
}

/// Ground below the last row where no hitbox reaches
const EMPTY_SPOT: Vec2 = Vec2::new(WIDTH / 2.0, HEIGHT - 20.0);

/// Demo player: starts the game, whacks zombies with some accuracy and
/// restarts after game over
#[derive(Debug, Clone)]
pub struct AutoPlayer {
    rng: Pcg32,
    /// Chance a click lands on its target
    accuracy: f32,
    /// Delay between noticing a risen zombie and clicking (ms)
    reaction_ms: u64,
    /// Pause on the menu/game-over screen before pressing a key (ms)
    idle_ms: u64,
    /// When each hole's current target was first noticed
    noticed: Vec<Option<u64>>,
    /// When the current menu/game-over screen was first seen
    screen_since: Option<u64>,
    sessions_started: u32,
}

impl AutoPlayer {
    pub fn new(seed: u64, accuracy: f32, reaction_ms: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            accuracy: accuracy.clamp(0.0, 1.0),
            reaction_ms,
            idle_ms: 1500,
            noticed: Vec::new(),
            screen_since: None,
            sessions_started: 0,
        }
    }

    pub fn from_settings(seed: u64, settings: &Settings) -> Self {
        Self::new(seed, settings.demo_accuracy, settings.demo_reaction_ms)
    }

    pub fn sessions_started(&self) -> u32 {
        self.sessions_started
    }

    /// Wait on a title/game-over screen, then press `key`
    fn press_after_idle(&mut self, now: u64, key: Key) -> Vec<InputEvent> {
        let since = *self.screen_since.get_or_insert(now);
        if now.saturating_sub(since) < self.idle_ms {
            return Vec::new();
        }
        self.screen_since = None;
        self.sessions_started += 1;
        log::debug!("Autoplayer pressing {:?}", key);
        vec![InputEvent::KeyPress(key)]
    }

    fn play(&mut self, now: u64, frame: &FrameSnapshot) -> Vec<InputEvent> {
        self.noticed.resize(frame.holes.len(), None);

        let mut events = Vec::new();
        for hole in &frame.holes {
            let target = hole.zombie.filter(|z| !z.is_hit && z.timer_bar.is_some());
            let slot = &mut self.noticed[hole.index];
            if target.is_none() {
                *slot = None;
                continue;
            }

            let since = *slot.get_or_insert(now);
            if now.saturating_sub(since) < self.reaction_ms {
                continue;
            }

            // Aim again after a miss only once another reaction delay has passed
            *slot = Some(now);
            let pos = if self.rng.random::<f32>() < self.accuracy {
                hole.hitbox.center()
            } else {
                EMPTY_SPOT
            };
            events.push(InputEvent::click(pos));
            // One click per frame
            break;
        }
        events
    }
}

impl InputSource for AutoPlayer {
    fn poll(&mut self, now: u64, frame: &FrameSnapshot) -> Vec<InputEvent> {
        match frame.state {
            SessionState::Menu => self.press_after_idle(now, Key::Start),
            SessionState::GameOver => self.press_after_idle(now, Key::Restart),
            SessionState::Pause => vec![InputEvent::KeyPress(Key::PauseResume)],
            SessionState::Play => {
                self.screen_since = None;
                self.play(now, frame)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameController, HoleGrid, SeededRandom};
    use crate::tuning::Tuning;

    fn menu_frame() -> FrameSnapshot {
        let game = GameController::new(Tuning::default(), SeededRandom::new(0));
        FrameSnapshot::capture(&game, 0)
    }

    #[test]
    fn test_scripted_input_releases_in_order() {
        let frame = menu_frame();
        let mut input = ScriptedInput::new(vec![
            (200, InputEvent::KeyPress(Key::PauseResume)),
            (0, InputEvent::KeyPress(Key::Start)),
            (200, InputEvent::Quit),
        ]);

        assert_eq!(input.poll(0, &frame), vec![InputEvent::KeyPress(Key::Start)]);
        assert!(input.poll(100, &frame).is_empty());
        assert_eq!(
            input.poll(250, &frame),
            vec![InputEvent::KeyPress(Key::PauseResume), InputEvent::Quit]
        );
        assert!(input.is_finished());
        assert!(input.poll(1000, &frame).is_empty());
    }

    #[test]
    fn test_empty_spot_misses_every_hole() {
        let grid = HoleGrid::staggered(&Tuning::default());
        assert_eq!(grid.holes_at(EMPTY_SPOT).count(), 0);
    }

    #[test]
    fn test_autoplayer_starts_after_idle() {
        let frame = menu_frame();
        let mut player = AutoPlayer::new(1, 1.0, 100);
        assert!(player.poll(0, &frame).is_empty());
        assert!(player.poll(1000, &frame).is_empty());
        assert_eq!(player.poll(1500, &frame), vec![InputEvent::KeyPress(Key::Start)]);
        assert_eq!(player.sessions_started(), 1);
    }

    #[test]
    fn test_autoplayer_hits_risen_zombie() {
        let mut game = GameController::new(Tuning::default(), SeededRandom::new(5));
        game.handle_event(InputEvent::KeyPress(Key::Start), 0);
        let mut now = 0;
        while game.field().active_count() == 0 {
            now += 16;
            game.update(now);
        }

        let mut player = AutoPlayer::new(1, 1.0, 100);
        // Still rising: not a target yet
        let frame = FrameSnapshot::capture(&game, now);
        assert!(player.poll(now, &frame).is_empty());

        // Risen at +300, clicked once the reaction delay has passed
        let frame = FrameSnapshot::capture(&game, now + 300);
        assert!(player.poll(now + 300, &frame).is_empty());
        let frame = FrameSnapshot::capture(&game, now + 400);
        let events = player.poll(now + 400, &frame);
        assert_eq!(events.len(), 1);

        for event in events {
            game.handle_event(event, now + 400);
        }
        assert_eq!(game.score().hit_count(), 1);
    }
}
