//! Invader bullet: shooter selection, fall, expiry

use glam::Vec2;

use super::dice::Dice;
use super::state::{GameState, SwarmGrid};
use crate::consts::{GAME_AREA_HEIGHT, INVADER_BULLET_HEIGHT, SWARM_ROWS};

/// Grid coordinates of invaders allowed to fire, in row-major order.
///
/// An active invader qualifies if it sits in the last row or nothing active
/// is below it in its column. Explosions do not block the line of fire.
pub fn eligible_shooters(grid: &SwarmGrid) -> Vec<(usize, usize)> {
    let mut shooters = Vec::new();

    for (r, row) in grid.iter().enumerate() {
        for (c, slot) in row.iter().enumerate() {
            if !slot.is_active() {
                continue;
            }
            let last_row = r == SWARM_ROWS - 1;
            let clear_below = grid[r + 1..].iter().all(|below| !below[c].is_active());
            if last_row || clear_below {
                shooters.push((r, c));
            }
        }
    }

    shooters
}

/// Fire from a random eligible invader when no bullet is active, otherwise fall
pub fn update(state: &mut GameState, dice: &mut impl Dice) {
    match state.invader_bullet {
        None => spawn(state, dice),
        Some(ref mut pos) => {
            pos.y += state.tuning.invader_bullet_speed;
            if pos.y >= GAME_AREA_HEIGHT {
                destroy(state);
            }
        }
    }
}

fn spawn(state: &mut GameState, dice: &mut impl Dice) {
    let shooters = eligible_shooters(&state.swarm.grid);
    if shooters.is_empty() {
        return;
    }

    let pick = dice.roll(shooters.len() as u32) as usize;
    let Some(&(r, c)) = shooters.get(pick) else {
        return;
    };
    if let Some(shooter) = state.swarm.grid[r][c].invader() {
        state.invader_bullet = Some(Vec2::new(
            shooter.position.x + shooter.width / 2.0,
            shooter.position.y + INVADER_BULLET_HEIGHT,
        ));
    }
}

pub fn destroy(state: &mut GameState) {
    state.invader_bullet = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SWARM_ROW_LENGTH;
    use crate::sim::dice::ScriptedDice;
    use crate::sim::state::Slot;
    use crate::sim::swarm;

    #[test]
    fn test_full_grid_bottom_row_only() {
        let state = GameState::default();
        let shooters = eligible_shooters(&state.swarm.grid);
        assert_eq!(shooters.len(), SWARM_ROW_LENGTH);
        assert!(shooters.iter().all(|&(r, _)| r == SWARM_ROWS - 1));
    }

    #[test]
    fn test_cleared_column_exposes_upper_invader() {
        let mut state = GameState::default();
        state.swarm.grid[4][3] = Slot::Empty;
        state.swarm.grid[3][3] = Slot::Empty;
        let shooters = eligible_shooters(&state.swarm.grid);
        assert!(shooters.contains(&(2, 3)));
        assert!(!shooters.contains(&(1, 3)));
        assert_eq!(shooters.len(), SWARM_ROW_LENGTH);
    }

    #[test]
    fn test_explosion_does_not_block() {
        let mut state = GameState::default();
        swarm::destroy(&mut state, (4, 0));
        let shooters = eligible_shooters(&state.swarm.grid);
        assert!(shooters.contains(&(3, 0)));
        assert!(!shooters.contains(&(4, 0)));
    }

    #[test]
    fn test_no_duplicates_in_last_row() {
        let state = GameState::default();
        let mut shooters = eligible_shooters(&state.swarm.grid);
        let len = shooters.len();
        shooters.dedup();
        assert_eq!(shooters.len(), len);
    }

    #[test]
    fn test_spawns_under_picked_shooter() {
        let mut state = GameState::default();
        let mut dice = ScriptedDice::new([2]);
        update(&mut state, &mut dice);

        let shooter = state.swarm.grid[4][2].invader().unwrap();
        let bullet = state.invader_bullet.unwrap();
        assert_eq!(bullet.x, shooter.position.x + shooter.width / 2.0);
        assert_eq!(bullet.y, shooter.position.y + INVADER_BULLET_HEIGHT);
    }

    #[test]
    fn test_no_spawn_without_shooters() {
        let mut state = GameState::default();
        state.swarm.grid = [[Slot::Empty; SWARM_ROW_LENGTH]; SWARM_ROWS];
        let mut dice = ScriptedDice::default();
        update(&mut state, &mut dice);
        assert!(state.invader_bullet.is_none());
    }

    #[test]
    fn test_falls_and_expires() {
        let mut state = GameState::default();
        state.invader_bullet = Some(Vec2::new(10.0, 100.0));
        let mut dice = ScriptedDice::default();
        update(&mut state, &mut dice);
        assert_eq!(
            state.invader_bullet.unwrap().y,
            100.0 + state.tuning.invader_bullet_speed
        );

        state.invader_bullet = Some(Vec2::new(10.0, GAME_AREA_HEIGHT - 0.5));
        let mut dice = ScriptedDice::new([0]);
        update(&mut state, &mut dice);
        assert!(state.invader_bullet.is_none());
        // The expiry tick does not also fire
        assert_eq!(dice.remaining(), 1);
    }
}
