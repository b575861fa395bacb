//! Sprite outlines
//!
//! Every sprite is a closed polygon in entity-local game-area units, anchored
//! at the entity's top-left corner and sized to fit its collision box.

use glam::Vec2;

use crate::sim::geometry::Shape;
use crate::sim::state::InvaderTier;

const fn p(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

/// Cannon, 13 x 7
pub const CANNON: [Vec2; 17] = [
    p(6.0, 0.0),
    p(7.0, 0.0),
    p(7.0, 1.0),
    p(8.0, 1.0),
    p(8.0, 3.0),
    p(12.0, 3.0),
    p(12.0, 4.0),
    p(13.0, 4.0),
    p(13.0, 7.0),
    p(0.0, 7.0),
    p(0.0, 4.0),
    p(1.0, 4.0),
    p(1.0, 3.0),
    p(5.0, 3.0),
    p(5.0, 2.0),
    p(5.0, 1.0),
    p(6.0, 1.0),
];

/// Small invader, 8 x 8, legs in
const SMALL_0: [Vec2; 28] = [
    p(3.0, 0.0),
    p(5.0, 0.0),
    p(5.0, 1.0),
    p(6.0, 1.0),
    p(6.0, 2.0),
    p(7.0, 2.0),
    p(7.0, 3.0),
    p(8.0, 3.0),
    p(8.0, 5.0),
    p(6.0, 5.0),
    p(6.0, 6.0),
    p(7.0, 6.0),
    p(7.0, 8.0),
    p(6.0, 8.0),
    p(6.0, 7.0),
    p(2.0, 7.0),
    p(2.0, 8.0),
    p(1.0, 8.0),
    p(1.0, 6.0),
    p(2.0, 6.0),
    p(2.0, 5.0),
    p(0.0, 5.0),
    p(0.0, 3.0),
    p(1.0, 3.0),
    p(1.0, 2.0),
    p(2.0, 2.0),
    p(2.0, 1.0),
    p(3.0, 1.0),
];

/// Small invader, legs out
const SMALL_1: [Vec2; 28] = [
    p(3.0, 0.0),
    p(5.0, 0.0),
    p(5.0, 1.0),
    p(6.0, 1.0),
    p(6.0, 2.0),
    p(7.0, 2.0),
    p(7.0, 3.0),
    p(8.0, 3.0),
    p(8.0, 5.0),
    p(7.0, 5.0),
    p(7.0, 6.0),
    p(8.0, 6.0),
    p(8.0, 8.0),
    p(7.0, 8.0),
    p(7.0, 7.0),
    p(1.0, 7.0),
    p(1.0, 8.0),
    p(0.0, 8.0),
    p(0.0, 6.0),
    p(1.0, 6.0),
    p(1.0, 5.0),
    p(0.0, 5.0),
    p(0.0, 3.0),
    p(1.0, 3.0),
    p(1.0, 2.0),
    p(2.0, 2.0),
    p(2.0, 1.0),
    p(3.0, 1.0),
];

/// Medium invader, 11 x 8, arms down
const MEDIUM_0: [Vec2; 24] = [
    p(2.0, 0.0),
    p(3.0, 0.0),
    p(3.0, 1.0),
    p(8.0, 1.0),
    p(8.0, 0.0),
    p(9.0, 0.0),
    p(9.0, 2.0),
    p(10.0, 2.0),
    p(10.0, 3.0),
    p(11.0, 3.0),
    p(11.0, 8.0),
    p(10.0, 8.0),
    p(10.0, 6.0),
    p(9.0, 6.0),
    p(9.0, 7.0),
    p(2.0, 7.0),
    p(2.0, 6.0),
    p(1.0, 6.0),
    p(1.0, 8.0),
    p(0.0, 8.0),
    p(0.0, 3.0),
    p(1.0, 3.0),
    p(1.0, 2.0),
    p(2.0, 2.0),
];

/// Medium invader, arms up
const MEDIUM_1: [Vec2; 28] = [
    p(2.0, 0.0),
    p(3.0, 0.0),
    p(3.0, 1.0),
    p(8.0, 1.0),
    p(8.0, 0.0),
    p(9.0, 0.0),
    p(9.0, 2.0),
    p(10.0, 2.0),
    p(10.0, 0.0),
    p(11.0, 0.0),
    p(11.0, 5.0),
    p(10.0, 5.0),
    p(10.0, 6.0),
    p(9.0, 6.0),
    p(9.0, 8.0),
    p(8.0, 8.0),
    p(8.0, 7.0),
    p(3.0, 7.0),
    p(3.0, 8.0),
    p(2.0, 8.0),
    p(2.0, 6.0),
    p(1.0, 6.0),
    p(1.0, 5.0),
    p(0.0, 5.0),
    p(0.0, 0.0),
    p(1.0, 0.0),
    p(1.0, 2.0),
    p(2.0, 2.0),
];

/// Large invader, 12 x 8, tentacles in
const LARGE_0: [Vec2; 24] = [
    p(4.0, 0.0),
    p(8.0, 0.0),
    p(8.0, 1.0),
    p(11.0, 1.0),
    p(11.0, 2.0),
    p(12.0, 2.0),
    p(12.0, 5.0),
    p(9.0, 5.0),
    p(9.0, 6.0),
    p(11.0, 6.0),
    p(11.0, 8.0),
    p(9.0, 8.0),
    p(9.0, 7.0),
    p(3.0, 7.0),
    p(3.0, 8.0),
    p(1.0, 8.0),
    p(1.0, 6.0),
    p(3.0, 6.0),
    p(3.0, 5.0),
    p(0.0, 5.0),
    p(0.0, 2.0),
    p(1.0, 2.0),
    p(1.0, 1.0),
    p(4.0, 1.0),
];

/// Large invader, tentacles out
const LARGE_1: [Vec2; 24] = [
    p(4.0, 0.0),
    p(8.0, 0.0),
    p(8.0, 1.0),
    p(11.0, 1.0),
    p(11.0, 2.0),
    p(12.0, 2.0),
    p(12.0, 5.0),
    p(10.0, 5.0),
    p(10.0, 6.0),
    p(12.0, 6.0),
    p(12.0, 8.0),
    p(10.0, 8.0),
    p(10.0, 7.0),
    p(2.0, 7.0),
    p(2.0, 8.0),
    p(0.0, 8.0),
    p(0.0, 6.0),
    p(2.0, 6.0),
    p(2.0, 5.0),
    p(0.0, 5.0),
    p(0.0, 2.0),
    p(1.0, 2.0),
    p(1.0, 1.0),
    p(4.0, 1.0),
];

/// Burst left in a slot while it decays, 12 x 8
pub const EXPLOSION: [Vec2; 12] = [
    p(0.0, 0.0),
    p(3.0, 2.0),
    p(6.0, 0.0),
    p(9.0, 2.0),
    p(12.0, 0.0),
    p(10.0, 4.0),
    p(12.0, 8.0),
    p(9.0, 6.0),
    p(6.0, 8.0),
    p(3.0, 6.0),
    p(0.0, 8.0),
    p(2.0, 4.0),
];

/// Bonus saucer, 10 x 5
pub const BONUS: [Vec2; 8] = [
    p(3.0, 0.0),
    p(7.0, 0.0),
    p(8.0, 1.0),
    p(10.0, 3.0),
    p(10.0, 5.0),
    p(0.0, 5.0),
    p(0.0, 3.0),
    p(2.0, 1.0),
];

/// Sprite for an invader tier at animation frame 0 or 1
pub fn invader(tier: InvaderTier, frame: u8) -> &'static Shape {
    match (tier, frame & 1) {
        (InvaderTier::Small, 0) => &SMALL_0,
        (InvaderTier::Small, _) => &SMALL_1,
        (InvaderTier::Medium, 0) => &MEDIUM_0,
        (InvaderTier::Medium, _) => &MEDIUM_1,
        (InvaderTier::Large, 0) => &LARGE_0,
        (InvaderTier::Large, _) => &LARGE_1,
    }
}
