//! Bonus target: rare spawn, flight across the top lane

use glam::Vec2;

use super::dice::Dice;
use super::state::GameState;
use crate::consts::{BONUS_LANE_Y, BONUS_START_X, GAME_AREA_WIDTH};

/// Roll for a spawn when absent, otherwise fly right and leave past the edge.
///
/// Only the last face of a `bonus_spawn_factor`-sided roll spawns, so each
/// tick has a 1-in-N chance independent of the last.
pub fn update(state: &mut GameState, dice: &mut impl Dice) {
    match state.bonus {
        None => {
            let factor = state.tuning.bonus_spawn_factor;
            if dice.roll(factor) == factor.saturating_sub(1) {
                state.bonus = Some(start_position());
                log::debug!("Bonus target spawned at tick {}", state.time_ticks);
            }
        }
        Some(ref mut pos) => {
            pos.x += state.tuning.bonus_speed;
            if pos.x >= GAME_AREA_WIDTH {
                destroy(state);
                log::debug!("Bonus target escaped");
            }
        }
    }
}

pub fn start_position() -> Vec2 {
    Vec2::new(BONUS_START_X, BONUS_LANE_Y)
}

pub fn destroy(state: &mut GameState) {
    state.bonus = None;
}
