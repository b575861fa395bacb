//! Cannon movement

use glam::Vec2;

use super::state::GameState;
use crate::consts::{
    CANNON_BOTTOM_OFFSET, CANNON_HEIGHT, CANNON_WIDTH, GAME_AREA_HEIGHT, GAME_AREA_WIDTH,
};

/// Starting position: centered horizontally, just above the bottom edge
pub fn init_at() -> Vec2 {
    Vec2::new(
        GAME_AREA_WIDTH / 2.0 - CANNON_WIDTH / 2.0,
        GAME_AREA_HEIGHT - CANNON_HEIGHT - CANNON_BOTTOM_OFFSET,
    )
}

/// Rightmost X the cannon may occupy
#[inline]
pub fn max_x() -> f32 {
    GAME_AREA_WIDTH - CANNON_WIDTH
}

/// Apply held direction flags. Left is applied first, then right.
pub fn update(state: &mut GameState) {
    let speed = state.tuning.cannon_speed;
    let pos = &mut state.cannon.position;

    if state.input.left {
        pos.x = (pos.x - speed).max(0.0);
    }
    if state.input.right {
        pos.x = (pos.x + speed).min(max_x());
    }
}
