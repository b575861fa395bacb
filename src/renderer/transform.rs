//! Game-area to viewport scaling

use glam::Vec2;

use crate::consts::{GAME_AREA_HEIGHT, GAME_AREA_WIDTH};
use crate::settings::Settings;
use crate::sim::geometry::{Point, Shape};

/// Per-axis scale from game-area units to viewport pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    scale: Vec2,
}

impl ViewTransform {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            scale: Vec2::new(
                viewport_width / GAME_AREA_WIDTH,
                viewport_height / GAME_AREA_HEIGHT,
            ),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.viewport_width, settings.viewport_height)
    }

    #[inline]
    pub fn point(&self, p: Point) -> Point {
        p * self.scale
    }

    /// Scale every vertex of a local shape
    pub fn shape(&self, shape: &Shape) -> Vec<Point> {
        shape.iter().map(|&p| self.point(p)).collect()
    }
}
