//! Invader swarm: layout, marching, reversal, explosion decay
//!
//! The swarm marches as one formation. The boundary check runs inside the
//! movement scan: as soon as the leading edge seen so far touches a wall the
//! scan stops, so invaders later in scan order skip their horizontal step on
//! that tick. Every active invader then drops, the heading flips, and the
//! speed grows once.

use glam::Vec2;

use super::state::{GameState, Heading, Invader, Slot, Swarm, SwarmGrid, column_inset};
use crate::consts::*;
use crate::tuning::Tuning;

/// X of the first column, centering the formation in the game area
pub fn first_column_x() -> f32 {
    let span = INVADER_CELL_WIDTH * SWARM_ROW_LENGTH as f32
        + INVADER_HORIZONTAL_GAP * (SWARM_ROW_LENGTH - 1) as f32;
    (GAME_AREA_WIDTH - span) / 2.0
}

/// Top-left of the grid cell at (row, column)
pub fn cell_origin(row: usize, col: usize) -> Vec2 {
    Vec2::new(
        first_column_x() + col as f32 * (INVADER_CELL_WIDTH + INVADER_HORIZONTAL_GAP),
        INVADER_INITIAL_TOP + row as f32 * (INVADER_HEIGHT + INVADER_VERTICAL_GAP),
    )
}

/// Build the full formation, heading right at base speed
pub fn init(tuning: &Tuning) -> Swarm {
    let mut grid: SwarmGrid = Default::default();

    for (r, row) in grid.iter_mut().enumerate() {
        let tier = tuning.tier_by_row[r];
        let width = tier.width();
        for (c, slot) in row.iter_mut().enumerate() {
            *slot = Slot::Active(Invader {
                position: cell_origin(r, c) + column_inset(width),
                width,
                tier,
                hitpoints: 1,
                score: tuning.invader_score(tier),
                frame: 0,
                anim_tick: 0,
            });
        }
    }

    Swarm {
        grid,
        heading: Heading::Right,
        speed: tuning.swarm_base_speed,
    }
}

/// Advance decay and animation, then march (or reverse) the formation
pub fn update(state: &mut GameState) {
    let tuning = &state.tuning;
    let swarm = &mut state.swarm;

    age_slots(&mut swarm.grid, tuning.decay_ticks, tuning.animation_period);

    if march(swarm) {
        for slot in swarm.grid.iter_mut().flatten() {
            if let Slot::Active(invader) = slot {
                invader.position.y += tuning.swarm_drop;
            }
        }
        swarm.speed += tuning.swarm_speed_increment;
        swarm.heading = swarm.heading.reversed();
        log::debug!(
            "Swarm reversed to {:?}, speed now {:.4}",
            swarm.heading,
            swarm.speed
        );
    }
}

/// Tick explosions toward empty and flip animation frames
fn age_slots(grid: &mut SwarmGrid, decay_ticks: u32, animation_period: u32) {
    for slot in grid.iter_mut().flatten() {
        match slot {
            Slot::Empty => {}
            Slot::Active(invader) => {
                invader.anim_tick = invader.anim_tick.saturating_add(1);
                if animation_period > 0 && invader.anim_tick >= animation_period {
                    invader.frame ^= 1;
                    invader.anim_tick = 0;
                }
            }
            Slot::Decaying { tick, .. } => {
                *tick = tick.saturating_add(1);
                if *tick > decay_ticks {
                    *slot = Slot::Empty;
                }
            }
        }
    }
}

/// Step invaders in scan order; returns true when a wall was reached
fn march(swarm: &mut Swarm) -> bool {
    let step = swarm.heading.sign() * swarm.speed;
    let mut min_x = f32::INFINITY;
    let mut max_right = f32::NEG_INFINITY;

    for slot in swarm.grid.iter_mut().flatten() {
        let Slot::Active(invader) = slot else {
            continue;
        };

        invader.position.x += step;
        min_x = min_x.min(invader.position.x);
        max_right = max_right.max(invader.position.x + invader.width);

        let at_wall = match swarm.heading {
            Heading::Right => max_right >= GAME_AREA_WIDTH,
            Heading::Left => min_x <= 0.0,
        };
        if at_wall {
            return true;
        }
    }

    false
}

/// Turn the invader at (row, col) into an explosion. Returns the invader that was there.
pub fn destroy(state: &mut GameState, (row, col): (usize, usize)) -> Option<Invader> {
    let slot = state.swarm.grid.get_mut(row)?.get_mut(col)?;
    match *slot {
        Slot::Active(invader) => {
            *slot = Slot::Decaying {
                position: invader.position,
                tick: 0,
            };
            Some(invader)
        }
        Slot::Empty | Slot::Decaying { .. } => None,
    }
}
