//! Cannon bullet: absent -> in flight -> absent

use glam::Vec2;

use super::state::GameState;
use crate::consts::{BULLET_HEIGHT, CANNON_WIDTH};

/// Spawn on fire when absent, otherwise climb and expire at the top edge.
///
/// Fire is ignored while a bullet is in flight, so at most one exists.
pub fn update(state: &mut GameState) {
    match state.cannon_bullet {
        None => {
            if state.input.fire {
                spawn(state);
            }
        }
        Some(ref mut pos) => {
            pos.y -= state.tuning.bullet_speed;
            if pos.y <= 0.0 {
                destroy(state);
            }
        }
    }
}

fn spawn(state: &mut GameState) {
    let cannon = state.cannon.position;
    state.cannon_bullet = Some(Vec2::new(
        cannon.x + CANNON_WIDTH / 2.0,
        cannon.y - BULLET_HEIGHT,
    ));
    state.shots_fired = state.shots_fired.wrapping_add(1);
}

pub fn destroy(state: &mut GameState) {
    state.cannon_bullet = None;
}
