//! Axis-aligned rectangle collider
//!
//! Every entity in the arena - bee, flowers, pollen grains - is an
//! axis-aligned box. Position is the bottom-left corner, matching the
//! arena's bottom-left origin.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle: bottom-left corner plus extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Bottom-left corner
    pub pos: Vec2,
    /// Width and height (strictly positive for valid colliders)
    pub size: Vec2,
}

impl Rect {
    /// Build a rect from corner and size.
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Right edge (x of the top-right corner)
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Top edge (y of the top-right corner)
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Center point
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }
}
