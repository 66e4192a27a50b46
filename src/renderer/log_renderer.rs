//! Headless renderer that reports frames through the log

use super::Renderer;
use super::snapshot::FrameSnapshot;
use crate::sim::SessionState;

/// Writes a HUD line at a fixed interval and announces state changes
#[derive(Debug)]
pub struct LogRenderer {
    hud_interval_ms: u64,
    last_hud_at: Option<u64>,
    last_state: Option<SessionState>,
    frames: u64,
}

impl LogRenderer {
    pub fn new(hud_interval_ms: u64) -> Self {
        Self {
            hud_interval_ms,
            last_hud_at: None,
            last_state: None,
            frames: 0,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// One-line HUD like the on-screen score panel
    pub fn hud_line(frame: &FrameSnapshot) -> String {
        let hud = &frame.hud;
        let mut line = format!(
            "{} | LIVES: {} | LEVEL {} | HITS: {} | MISS: {} | ACC: {:.1}%",
            hud.score, hud.lives, hud.level, hud.hits, hud.misses, hud.accuracy
        );
        if hud.show_combo {
            line.push_str(&format!(" | COMBO x{}", hud.combo));
        }
        line
    }

    /// Hole occupancy as a compact row string: `.` empty, `z` rising, `Z` risen, `x` squashed
    pub fn field_line(frame: &FrameSnapshot) -> String {
        frame
            .holes
            .iter()
            .map(|hole| match hole.zombie {
                None => '.',
                Some(z) if z.is_hit => 'x',
                Some(z) if z.timer_bar.is_some() => 'Z',
                Some(_) => 'z',
            })
            .collect()
    }

    fn announce(&self, frame: &FrameSnapshot) {
        match frame.state {
            SessionState::Menu => log::info!("WHACK-A-ZOMBIE - press start"),
            SessionState::Play => log::info!("Playing"),
            SessionState::Pause => log::info!("PAUSED"),
            SessionState::GameOver => {
                let hud = &frame.hud;
                log::info!(
                    "GAME OVER - Final Score: {} | Best Combo: {} | Hits: {} | Misses: {} | Accuracy: {:.1}%",
                    hud.score,
                    hud.max_combo,
                    hud.hits,
                    hud.misses,
                    hud.accuracy
                );
            }
        }
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, frame: &FrameSnapshot) {
        self.frames += 1;

        if self.last_state != Some(frame.state) {
            self.announce(frame);
            self.last_state = Some(frame.state);
        }

        if frame.state != SessionState::Play {
            return;
        }

        let due = self
            .last_hud_at
            .is_none_or(|at| frame.game_time.saturating_sub(at) >= self.hud_interval_ms);
        if due {
            self.last_hud_at = Some(frame.game_time);
            log::debug!("{} [{}]", Self::hud_line(frame), Self::field_line(frame));
        }
        log::trace!("frame {} at {}", self.frames, frame.game_time);
    }
}
