//! Frame loop
//!
//! Each frame runs strictly in order: poll input, apply events, tick the
//! simulation, forward sounds, render. Nothing inside a frame blocks.

use crate::audio::{AudioPlayer, SoundEffect};
use crate::platform::{Clock, InputSource, ManualClock};
use crate::renderer::{FrameSnapshot, Renderer};
use crate::sim::{GameController, GameEvent, RandomSource};

/// Controller plus its collaborators
pub struct GameLoop<I, A, V, R>
where
    I: InputSource,
    A: AudioPlayer,
    V: Renderer,
    R: RandomSource,
{
    controller: GameController<R>,
    input: I,
    audio: A,
    renderer: V,
    /// Last rendered frame, shown to the input source
    frame: FrameSnapshot,
    frames: u64,
    sessions_finished: u32,
}

impl<I, A, V, R> GameLoop<I, A, V, R>
where
    I: InputSource,
    A: AudioPlayer,
    V: Renderer,
    R: RandomSource,
{
    /// Wire up the loop and start the background music
    pub fn new(controller: GameController<R>, input: I, mut audio: A, renderer: V, now: u64) -> Self {
        audio.play(SoundEffect::MusicStart);
        let frame = FrameSnapshot::capture(&controller, now);
        Self {
            controller,
            input,
            audio,
            renderer,
            frame,
            frames: 0,
            sessions_finished: 0,
        }
    }

    pub fn controller(&self) -> &GameController<R> {
        &self.controller
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn renderer(&self) -> &V {
        &self.renderer
    }

    pub fn frame(&self) -> &FrameSnapshot {
        &self.frame
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Sessions that reached game over
    pub fn sessions_finished(&self) -> u32 {
        self.sessions_finished
    }

    /// Run one frame at wall-clock `now`. Returns false once quit.
    pub fn run_frame(&mut self, now: u64) -> bool {
        for event in self.input.poll(now, &self.frame) {
            self.controller.handle_event(event, now);
            if !self.controller.is_running() {
                break;
            }
        }

        self.controller.update(now);

        for event in self.controller.take_events() {
            if let GameEvent::GameOver { .. } = event {
                self.sessions_finished += 1;
            }
            if let Some(effect) = SoundEffect::for_event(&event) {
                self.audio.play(effect);
            }
        }

        self.frame = FrameSnapshot::capture(&self.controller, now);
        self.renderer.render(&self.frame);
        self.frames += 1;

        self.controller.is_running()
    }

    /// Run on a simulated clock for `duration_ms` or until quit
    pub fn run_simulated(&mut self, clock: &mut ManualClock, frame_ms: u64, duration_ms: u64) {
        let end = clock.now_ms() + duration_ms;
        while clock.now_ms() < end {
            clock.advance(frame_ms.max(1));
            if !self.run_frame(clock.now_ms()) {
                break;
            }
        }
        self.log_summary();
    }

    /// Run against a real clock, sleeping between frames
    pub fn run_realtime<C: Clock>(&mut self, clock: &C, frame_ms: u64, duration_ms: Option<u64>) {
        let frame_ms = frame_ms.max(1);
        loop {
            let started = clock.now_ms();
            if duration_ms.is_some_and(|limit| started >= limit) || !self.run_frame(started) {
                break;
            }
            let spent = clock.now_ms().saturating_sub(started);
            if spent < frame_ms {
                std::thread::sleep(std::time::Duration::from_millis(frame_ms - spent));
            }
        }
        self.log_summary();
    }

    fn log_summary(&self) {
        let hud = &self.frame.hud;
        log::info!(
            "Stopped after {} frames in {} ({} finished sessions, score {}, level {})",
            self.frames,
            self.controller.state().as_str(),
            self.sessions_finished,
            hud.score,
            hud.level
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{AutoPlayer, ScriptedInput};
    use crate::renderer::LogRenderer;
    use crate::sim::{InputEvent, Key, SeededRandom, SessionState};
    use crate::tuning::Tuning;

    #[derive(Debug, Default)]
    struct RecordingAudio {
        played: Vec<SoundEffect>,
    }

    impl AudioPlayer for RecordingAudio {
        fn play(&mut self, effect: SoundEffect) {
            self.played.push(effect);
        }
    }

    #[derive(Debug, Default)]
    struct CountingRenderer {
        states: Vec<SessionState>,
    }

    impl Renderer for CountingRenderer {
        fn render(&mut self, frame: &FrameSnapshot) {
            self.states.push(frame.state);
        }
    }

    fn controller(seed: u64) -> GameController<SeededRandom> {
        GameController::new(Tuning::default(), SeededRandom::new(seed))
    }

    #[test]
    fn test_music_starts_with_loop() {
        let game = GameLoop::new(
            controller(1),
            ScriptedInput::default(),
            RecordingAudio::default(),
            CountingRenderer::default(),
            0,
        );
        assert_eq!(game.audio().played, vec![SoundEffect::MusicStart]);
    }

    #[test]
    fn test_scripted_session() {
        let input = ScriptedInput::new(vec![
            (16, InputEvent::KeyPress(Key::Start)),
            (500, InputEvent::KeyPress(Key::PauseResume)),
            (800, InputEvent::KeyPress(Key::PauseResume)),
            (1000, InputEvent::Quit),
        ]);
        let mut game = GameLoop::new(
            controller(2),
            input,
            RecordingAudio::default(),
            CountingRenderer::default(),
            0,
        );

        let mut clock = ManualClock::new(0);
        game.run_simulated(&mut clock, 16, 10_000);

        assert!(!game.controller().is_running());
        // Quit lands on the first frame at or after 1000 ms
        assert_eq!(clock.now_ms(), 1008);
        let states = &game.renderer().states;
        assert_eq!(states[0], SessionState::Play);
        assert!(states.contains(&SessionState::Pause));
        assert_eq!(game.frames(), states.len() as u64);
    }

    #[test]
    fn test_unattended_game_ends_with_misses() {
        // Accuracy 0: every click lands on empty ground with no combo, so
        // only escapes cost lives
        let input = AutoPlayer::new(3, 0.0, 100);
        let mut game = GameLoop::new(
            controller(3),
            input,
            RecordingAudio::default(),
            LogRenderer::new(1000),
            0,
        );

        let mut clock = ManualClock::new(0);
        let mut now = 0;
        while game.sessions_finished() == 0 && now < 600_000 {
            clock.advance(16);
            now = clock.now_ms();
            game.run_frame(now);
        }

        assert_eq!(game.sessions_finished(), 1);
        assert_eq!(game.controller().state(), SessionState::GameOver);
        assert_eq!(game.controller().score().hit_count(), 0);
        let misses = game
            .audio()
            .played
            .iter()
            .filter(|&&e| e == SoundEffect::Miss)
            .count();
        assert!(misses >= 1);
        assert!(!game.audio().played.contains(&SoundEffect::Hit));
    }

    #[test]
    fn test_autoplayer_scores() {
        let input = AutoPlayer::new(4, 1.0, 150);
        let mut game = GameLoop::new(
            controller(4),
            input,
            RecordingAudio::default(),
            CountingRenderer::default(),
            0,
        );
        let mut clock = ManualClock::new(0);
        game.run_simulated(&mut clock, 16, 30_000);

        let score = game.controller().score();
        assert!(score.hit_count() > 0);
        assert!(game.audio().played.contains(&SoundEffect::Hit));
    }
}
