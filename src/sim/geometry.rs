//! Geometry primitives
//!
//! Points are plain `glam` vectors in game-area units. Shapes are only ever
//! drawn; collision always uses the axis-aligned box of an entity kind.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A 2D position in game-area units
pub type Point = Vec2;

/// Closed polygon outline in entity-local coordinates
pub type Shape = [Point];

/// Axis-aligned bounding box anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Point,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Point, width: f32, height: f32) -> Self {
        Self {
            min,
            size: Vec2::new(width, height),
        }
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Point {
        self.min + self.size
    }

    /// Separating-axis overlap test; touching edges count as overlapping
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        !(a_max.x < other.min.x
            || b_max.x < self.min.x
            || a_max.y < other.min.y
            || b_max.y < self.min.y)
    }

    /// Outline of the box in local coordinates (for hitbox rendering)
    pub fn outline(&self) -> [Point; 4] {
        [
            Vec2::ZERO,
            Vec2::new(self.size.x, 0.0),
            self.size,
            Vec2::new(0.0, self.size.y),
        ]
    }
}
