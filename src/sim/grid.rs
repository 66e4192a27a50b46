//! Hole layout and pointer hit-testing

use glam::Vec2;

use crate::consts::{COLUMN_SPACING, HOLE_COUNT, ROW_Y_POSITIONS};
use crate::tuning::Tuning;

/// Axis-aligned hitbox, half-open on the right and bottom edges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub min: Vec2,
    pub max: Vec2,
}

impl Hitbox {
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x < self.max.x && point.y >= self.min.y && point.y < self.max.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// Fixed hole positions for a session, plus the hitbox geometry
#[derive(Debug, Clone)]
pub struct HoleGrid {
    positions: Vec<Vec2>,
    sprite_size: Vec2,
    padding: f32,
}

impl HoleGrid {
    /// Build a grid from explicit hole positions
    pub fn new(positions: Vec<Vec2>, sprite_size: Vec2, padding: f32) -> Self {
        Self {
            positions,
            sprite_size,
            padding,
        }
    }

    /// Reference layout: three staggered rows of 7, 6 and 7 holes
    pub fn staggered(tuning: &Tuning) -> Self {
        let outer_row = || (1..14).step_by(2).map(|n| n as f32 * COLUMN_SPACING);
        let middle_row = (2..13).step_by(2).map(|n| n as f32 * COLUMN_SPACING);

        let mut positions = Vec::with_capacity(HOLE_COUNT);
        positions.extend(outer_row().map(|x| Vec2::new(x, ROW_Y_POSITIONS[0])));
        positions.extend(middle_row.map(|x| Vec2::new(x, ROW_Y_POSITIONS[1])));
        positions.extend(outer_row().map(|x| Vec2::new(x, ROW_Y_POSITIONS[2])));

        Self::new(
            positions,
            Vec2::new(tuning.zombie_width, tuning.zombie_height),
            tuning.hitbox_padding,
        )
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn position(&self, hole_index: usize) -> Vec2 {
        self.positions[hole_index]
    }

    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    /// Hitbox covering the sprite as it stands in the hole: it extends one
    /// sprite height above the hole baseline and is widened on the left by
    /// the padding.
    pub fn hitbox(&self, hole_index: usize) -> Hitbox {
        let pos = self.positions[hole_index];
        let half_width = (self.sprite_size.x / 2.0).floor();
        let min = Vec2::new(pos.x - half_width - self.padding, pos.y - self.sprite_size.y);
        let size = Vec2::new(self.sprite_size.x + self.padding, self.sprite_size.y);
        Hitbox { min, max: min + size }
    }

    /// Holes whose hitbox contains `point`, in index order
    pub fn holes_at(&self, point: Vec2) -> impl Iterator<Item = usize> + '_ {
        (0..self.positions.len()).filter(move |&i| self.hitbox(i).contains(point))
    }
}
