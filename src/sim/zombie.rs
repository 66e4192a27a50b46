//! Zombie entities and the hole slots that own them

use serde::{Deserialize, Serialize};

/// Fraction of full height at which a zombie counts as risen (timer bar shows)
pub const FULLY_RISEN_FRACTION: f32 = 0.8;

/// A zombie occupying one hole for a bounded lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zombie {
    pub hole_index: usize,
    /// Game time (ms) at which the zombie appeared
    pub spawn_time: u64,
    is_hit: bool,
}

impl Zombie {
    pub fn new(hole_index: usize, spawn_time: u64) -> Self {
        Self {
            hole_index,
            spawn_time,
            is_hit: false,
        }
    }

    pub fn is_hit(&self) -> bool {
        self.is_hit
    }

    /// Time since spawn (ms)
    pub fn elapsed(&self, now: u64) -> u64 {
        now.saturating_sub(self.spawn_time)
    }

    /// Rising animation progress in [0, 1]
    pub fn rise_progress(&self, now: u64, rise_duration_ms: u64) -> f32 {
        if rise_duration_ms == 0 {
            return 1.0;
        }
        (self.elapsed(now) as f32 / rise_duration_ms as f32).min(1.0)
    }

    /// Visible sprite height in pixels while rising (head appears first)
    pub fn visible_height(&self, now: u64, rise_duration_ms: u64, max_height: f32) -> u32 {
        (max_height * self.rise_progress(now, rise_duration_ms)) as u32
    }

    /// Share of the visibility window still left, clamped at 0
    pub fn time_remaining_ratio(&self, now: u64, visible_duration_ms: u64) -> f32 {
        if visible_duration_ms == 0 {
            return 0.0;
        }
        (1.0 - self.elapsed(now) as f32 / visible_duration_ms as f32).max(0.0)
    }

    pub fn is_fully_risen(&self, now: u64, rise_duration_ms: u64, max_height: f32) -> bool {
        self.visible_height(now, rise_duration_ms, max_height) as f32
            >= max_height * FULLY_RISEN_FRACTION
    }

    fn should_timeout(&self, now: u64, visible_duration_ms: u64) -> bool {
        !self.is_hit && self.elapsed(now) > visible_duration_ms
    }

    fn should_cleanup(&self, now: u64, hit_display_duration_ms: u64) -> bool {
        self.is_hit && self.elapsed(now) > hit_display_duration_ms
    }
}

/// Result of a spawn request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOutcome {
    Spawned,
    AlreadyOccupied,
}

/// Result of a hit request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    Hit,
    NoZombie,
    AlreadyHit,
}

/// Fixed array of hole slots, each empty or holding one zombie
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZombieField {
    slots: Vec<Option<Zombie>>,
    /// How long squashed zombies linger before cleanup (ms)
    hit_display_duration_ms: u64,
}

impl ZombieField {
    pub fn new(hole_count: usize, hit_display_duration_ms: u64) -> Self {
        Self {
            slots: vec![None; hole_count],
            hit_display_duration_ms,
        }
    }

    /// Number of holes
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn check_index(&self, hole_index: usize) {
        debug_assert!(
            hole_index < self.slots.len(),
            "hole index {hole_index} out of range (holes: {})",
            self.slots.len()
        );
    }

    pub fn get(&self, hole_index: usize) -> Option<&Zombie> {
        self.check_index(hole_index);
        self.slots[hole_index].as_ref()
    }

    pub fn is_occupied(&self, hole_index: usize) -> bool {
        self.get(hole_index).is_some()
    }

    /// Occupied slots in hole order
    pub fn iter(&self) -> impl Iterator<Item = &Zombie> {
        self.slots.iter().flatten()
    }

    pub fn active_count(&self) -> usize {
        self.iter().count()
    }

    /// Indices of empty holes, ascending
    pub fn available_holes(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    /// Place a fresh zombie in an empty hole
    pub fn spawn(&mut self, hole_index: usize, now: u64) -> SpawnOutcome {
        self.check_index(hole_index);
        let slot = &mut self.slots[hole_index];
        if slot.is_some() {
            return SpawnOutcome::AlreadyOccupied;
        }
        *slot = Some(Zombie::new(hole_index, now));
        SpawnOutcome::Spawned
    }

    /// Mark the zombie in `hole_index` as hit; only the first call succeeds
    pub fn hit(&mut self, hole_index: usize) -> HitOutcome {
        self.check_index(hole_index);
        match &mut self.slots[hole_index] {
            None => HitOutcome::NoZombie,
            Some(zombie) if zombie.is_hit => HitOutcome::AlreadyHit,
            Some(zombie) => {
                zombie.is_hit = true;
                HitOutcome::Hit
            }
        }
    }

    /// Clear escaped and finished zombies. Returns how many escaped.
    ///
    /// An unhit zombie older than `visible_duration_ms` escapes and is counted;
    /// a hit zombie older than the hit display duration is removed silently.
    pub fn sweep(&mut self, now: u64, visible_duration_ms: u64) -> u32 {
        let mut timeouts = 0;
        for slot in &mut self.slots {
            let Some(zombie) = *slot else { continue };

            if zombie.should_timeout(now, visible_duration_ms) {
                log::debug!("Zombie escaped from hole {}", zombie.hole_index);
                *slot = None;
                timeouts += 1;
            } else if zombie.should_cleanup(now, self.hit_display_duration_ms) {
                *slot = None;
            }
        }
        timeouts
    }

    pub fn reset(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }
}
