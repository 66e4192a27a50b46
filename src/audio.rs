//! Sound effect dispatch
//!
//! The simulation never waits on audio: effects are fire-and-forget and a
//! missing or silent backend must not change gameplay.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Zombie squashed
    Hit,
    /// Zombie escaped or click missed with a combo going
    Miss,
    /// Start (or restart) the background loop
    MusicStart,
}

impl SoundEffect {
    /// Sound to play for a game event, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::ZombieHit { .. } => Some(SoundEffect::Hit),
            GameEvent::ClickMissed | GameEvent::ZombiesEscaped { .. } => Some(SoundEffect::Miss),
            GameEvent::MusicStart => Some(SoundEffect::MusicStart),
            _ => None,
        }
    }

    pub fn is_music(&self) -> bool {
        matches!(self, SoundEffect::MusicStart)
    }
}

/// Receives sound effect notifications
pub trait AudioPlayer {
    fn play(&mut self, effect: SoundEffect);
}

/// Audio player that drops everything
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioPlayer for NullAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Volume-aware audio manager without an output device.
///
/// Applies the mixer settings and logs what would be played.
#[derive(Debug)]
pub struct AudioManager {
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    /// Miss sounds are mixed quieter than hits
    miss_volume: f32,
    muted: bool,
    music_playing: bool,
    played: u64,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.4,
            miss_volume: 0.4,
            muted: false,
            music_playing: false,
            played: 0,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut audio = Self::new();
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_music_volume(settings.music_volume);
        audio.set_muted(settings.muted);
        audio
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Set music volume (0.0 - 1.0)
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_music_playing(&self) -> bool {
        self.music_playing
    }

    /// Number of effects actually played (not muted)
    pub fn played(&self) -> u64 {
        self.played
    }

    /// Effective volume for an effect
    pub fn effective_volume(&self, effect: SoundEffect) -> f32 {
        if self.muted {
            return 0.0;
        }
        let channel = match effect {
            SoundEffect::Hit => self.sfx_volume,
            SoundEffect::Miss => self.sfx_volume * self.miss_volume,
            SoundEffect::MusicStart => self.music_volume,
        };
        self.master_volume * channel
    }
}

impl AudioPlayer for AudioManager {
    fn play(&mut self, effect: SoundEffect) {
        if effect.is_music() {
            // Restarting the loop while it plays starts it over
            self.music_playing = true;
        }

        let vol = self.effective_volume(effect);
        if vol <= 0.0 {
            return;
        }
        self.played += 1;
        log::trace!("Play {:?} at volume {:.2}", effect, vol);
    }
}
