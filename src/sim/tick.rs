//! Fixed timestep simulation tick
//!
//! Core game loop that advances the match by one step. Actors run one at a
//! time in a fixed order, then collisions resolve, then termination is
//! evaluated. A tick is a complete state transition; nothing may observe the
//! state halfway through one.

use serde::{Deserialize, Serialize};

use super::collision::{self, CollisionEvent};
use super::dice::Dice;
use super::state::{GameOverReason, GamePhase, GameState};
use super::{bonus, cannon, cannon_bullet, invader_bullet, swarm};

/// Input flags for a single tick, latched by the host before it runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Move the cannon left
    pub left: bool,
    /// Move the cannon right
    pub right: bool,
    /// Fire (ignored while a cannon bullet is in flight)
    pub fire: bool,
}

/// Advance the game state by one fixed timestep.
///
/// Returns the collisions resolved during the tick. A no-op once the match
/// is over.
pub fn tick(state: &mut GameState, dice: &mut impl Dice) -> Vec<CollisionEvent> {
    if let GamePhase::GameOver(_) = state.phase {
        return Vec::new();
    }
    if let Some(reason) = state.termination() {
        game_over(state, reason);
        return Vec::new();
    }

    state.time_ticks += 1;

    cannon::update(state);
    cannon_bullet::update(state);
    swarm::update(state);
    invader_bullet::update(state, dice);
    bonus::update(state, dice);
    let events = collision::resolve(state);

    if let Some(reason) = state.termination() {
        game_over(state, reason);
    }

    events
}

fn game_over(state: &mut GameState, reason: GameOverReason) {
    state.phase = GamePhase::GameOver(reason);
    log::info!(
        "Game over ({:?}) at tick {} with score {}",
        reason,
        state.time_ticks,
        state.score
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::dice::ScriptedDice;
    use crate::sim::state::{Invader, InvaderTier, Slot};
    use glam::Vec2;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn quiet_state() -> GameState {
        let mut state = GameState::default();
        state.swarm.grid = [[Slot::Empty; SWARM_ROW_LENGTH]; SWARM_ROWS];
        state
    }

    fn invader_at(x: f32, y: f32, score: u32) -> Slot {
        Slot::Active(Invader {
            position: Vec2::new(x, y),
            width: 8.0,
            tier: InvaderTier::Small,
            hitpoints: 1,
            score,
            frame: 0,
            anim_tick: 0,
        })
    }

    #[test]
    fn test_tick_advances_counter() {
        let mut state = GameState::default();
        let mut dice = ScriptedDice::default();
        tick(&mut state, &mut dice);
        tick(&mut state, &mut dice);
        assert_eq!(state.time_ticks, 2);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_fire_then_hold_keeps_one_bullet() {
        let mut state = GameState::default();
        let mut dice = ScriptedDice::default();
        state.input = TickInput {
            fire: true,
            ..Default::default()
        };

        tick(&mut state, &mut dice);
        let first = state.cannon_bullet.unwrap();
        tick(&mut state, &mut dice);
        let second = state.cannon_bullet.unwrap();

        assert_eq!(state.shots_fired, 1);
        assert!(second.y < first.y);
    }

    // Every slot emptied while the cannon still stands
    #[test]
    fn test_swarm_cleared_ends_match() {
        let mut state = GameState::default();
        state.swarm.grid = [[Slot::Empty; SWARM_ROW_LENGTH]; SWARM_ROWS];
        assert!(state.cannon.hitpoints > 0);
        assert!(state.is_terminal());

        let mut dice = ScriptedDice::default();
        tick(&mut state, &mut dice);
        assert_eq!(state.phase, GamePhase::GameOver(GameOverReason::SwarmCleared));
    }

    // Three invader bullet hits, full swarm still on the field
    #[test]
    fn test_three_hits_destroy_cannon() {
        let mut state = GameState::default();
        let mut dice = ScriptedDice::default();

        for expected in [2, 1, 0] {
            let cannon = state.cannon.position;
            state.invader_bullet = Some(cannon + Vec2::new(6.0, -1.0));
            let events = tick(&mut state, &mut dice);
            assert_eq!(events, vec![CollisionEvent::CannonHit { hitpoints_left: expected }]);
            assert_eq!(state.cannon.hitpoints, expected);
        }

        assert_eq!(state.swarm.active_count(), 55);
        assert_eq!(state.phase, GamePhase::GameOver(GameOverReason::CannonDestroyed));
    }

    // Only the last face of the roll spawns the bonus
    #[test]
    fn test_bonus_spawn_roll() {
        // First roll picks the shooter, second is the bonus roll
        let mut state = GameState::default();
        let mut dice = ScriptedDice::new([0, 299]);
        tick(&mut state, &mut dice);
        assert_eq!(state.bonus, Some(Vec2::new(0.0, 20.0)));

        let mut state = GameState::default();
        let mut dice = ScriptedDice::new([0, 298]);
        tick(&mut state, &mut dice);
        assert!(state.bonus.is_none());
    }

    // A bullet overlapping two stacked invaders takes only the first
    #[test]
    fn test_stacked_invaders_one_hit() {
        let mut state = quiet_state();
        state.swarm.grid[1][0] = invader_at(100.0, 80.0, 30);
        state.swarm.grid[2][0] = invader_at(100.0, 86.0, 10);
        let bullet_speed = state.tuning.bullet_speed;
        state.cannon_bullet = Some(Vec2::new(104.0, 84.0 + bullet_speed));

        let mut dice = ScriptedDice::default();
        tick(&mut state, &mut dice);

        assert!(matches!(state.swarm.grid[1][0], Slot::Decaying { .. }));
        assert!(state.swarm.grid[2][0].is_active());
        assert_eq!(state.score, 30);
        assert!(state.cannon_bullet.is_none());
    }

    #[test]
    fn test_decay_timing() {
        let mut state = quiet_state();
        state.swarm.grid[0][0] = invader_at(34.0, 40.0, 30);
        let bullet_speed = state.tuning.bullet_speed;
        state.cannon_bullet = Some(Vec2::new(38.0, 44.0 + bullet_speed));
        let mut dice = ScriptedDice::default();

        tick(&mut state, &mut dice);
        let destroyed_at = state.time_ticks;
        assert!(matches!(state.swarm.grid[0][0], Slot::Decaying { .. }));

        let threshold = u64::from(state.tuning.decay_ticks);
        while state.time_ticks < destroyed_at + threshold {
            tick(&mut state, &mut dice);
            assert!(matches!(state.swarm.grid[0][0], Slot::Decaying { .. }));
            assert_eq!(state.phase, GamePhase::Playing);
        }

        tick(&mut state, &mut dice);
        assert_eq!(state.time_ticks, destroyed_at + threshold + 1);
        assert_eq!(state.swarm.grid[0][0], Slot::Empty);
        assert_eq!(state.phase, GamePhase::GameOver(GameOverReason::SwarmCleared));
    }

    #[test]
    fn test_invasion_by_drop() {
        let mut state = quiet_state();
        state.swarm.grid[0][0] = invader_at(247.9, 170.0, 10);
        let mut dice = ScriptedDice::default();

        tick(&mut state, &mut dice);

        assert_eq!(state.phase, GamePhase::GameOver(GameOverReason::Invaded));
    }

    #[test]
    fn test_terminal_tick_is_noop() {
        let mut state = GameState::default();
        state.cannon.hitpoints = 0;
        state.input = TickInput {
            left: true,
            fire: true,
            ..Default::default()
        };
        let cannon = state.cannon.position;
        let mut dice = ScriptedDice::default();

        assert!(tick(&mut state, &mut dice).is_empty());
        assert!(tick(&mut state, &mut dice).is_empty());

        assert_eq!(state.phase, GamePhase::GameOver(GameOverReason::CannonDestroyed));
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.cannon.position, cannon);
        assert!(state.cannon_bullet.is_none());
    }

    #[test]
    fn test_determinism() {
        // Same seed and inputs must produce identical matches
        let mut state1 = GameState::default();
        let mut state2 = GameState::default();
        let mut rng1 = Pcg32::seed_from_u64(99999);
        let mut rng2 = Pcg32::seed_from_u64(99999);

        for i in 0..600u32 {
            let input = TickInput {
                left: i % 90 < 30,
                right: i % 90 >= 60,
                fire: i % 7 == 0,
            };
            state1.input = input;
            state2.input = input;
            tick(&mut state1, &mut rng1);
            tick(&mut state2, &mut rng2);
        }

        let json1 = serde_json::to_string(&state1).unwrap();
        let json2 = serde_json::to_string(&state2).unwrap();
        assert_eq!(json1, json2);
    }

    proptest! {
        #[test]
        fn prop_score_and_hitpoints_monotonic(
            seed in any::<u64>(),
            inputs in prop::collection::vec(any::<(bool, bool, bool)>(), 1..400),
        ) {
            let mut state = GameState::default();
            let mut rng = Pcg32::seed_from_u64(seed);

            for (left, right, fire) in inputs {
                let score = state.score;
                let hitpoints = state.cannon.hitpoints;
                let shots = state.shots_fired;
                let had_bullet = state.cannon_bullet.is_some();

                state.input = TickInput { left, right, fire };
                tick(&mut state, &mut rng);

                prop_assert!(state.score >= score);
                prop_assert!(state.cannon.hitpoints <= hitpoints);
                prop_assert!(state.shots_fired - shots <= 1);
                if had_bullet {
                    prop_assert_eq!(state.shots_fired, shots);
                }
                let x = state.cannon.position.x;
                prop_assert!((0.0..=GAME_AREA_WIDTH - CANNON_WIDTH).contains(&x));
            }
        }
    }
}
