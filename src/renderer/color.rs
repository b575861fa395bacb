//! Colors for game elements

use crate::consts::{GREEN_ZONE, RED_ZONE};

/// Linear RGBA
pub type Color = [f32; 4];

pub mod colors {
    use super::Color;

    pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const RED: Color = [0.95, 0.2, 0.2, 1.0];
    pub const GREEN: Color = [0.2, 0.9, 0.3, 1.0];
    /// Debug hitbox outlines
    pub const HITBOX: Color = [1.0, 0.9, 0.1, 1.0];
}

/// Colour of an entity whose top edge is at `y`.
///
/// Mimics the coloured overlay strips of the cabinet: red near the top, green
/// over the defense line, white in between.
pub fn zone_color(y: f32) -> Color {
    if y < RED_ZONE {
        colors::RED
    } else if y >= GREEN_ZONE {
        colors::GREEN
    } else {
        colors::WHITE
    }
}
