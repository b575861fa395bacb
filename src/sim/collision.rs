//! Collision resolution
//!
//! Runs once per tick after every actor has moved. Checks run in a fixed
//! order, and a bullet consumed by an earlier check is gone for the later
//! ones, so the order decides which target wins a contested bullet.

use super::state::{GameState, Slot, bonus_box, cannon_bullet_box, invader_bullet_box};
use super::{bonus, cannon_bullet, defense, invader_bullet, swarm};

/// Something that happened during resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionEvent {
    /// Cannon bullet absorbed by the bunker at this index
    CannonBulletBlocked { bunker: usize },
    /// Cannon bullet struck the invader at (row, col); `destroyed` if it went down
    InvaderHit {
        row: usize,
        col: usize,
        destroyed: bool,
        score: u32,
    },
    /// Cannon bullet struck the bonus target
    BonusHit { score: u32 },
    /// Invader bullet absorbed by the bunker at this index
    InvaderBulletBlocked { bunker: usize },
    /// Invader bullet struck the cannon
    CannonHit { hitpoints_left: u8 },
}

/// Resolve all collisions for this tick, in order
pub fn resolve(state: &mut GameState) -> Vec<CollisionEvent> {
    let mut events = Vec::new();

    events.extend(cannon_bullet_vs_bunkers(state));
    events.extend(cannon_bullet_vs_swarm(state));
    events.extend(cannon_bullet_vs_bonus(state));
    events.extend(invader_bullet_vs_bunkers(state));
    events.extend(invader_bullet_vs_cannon(state));

    events
}

fn cannon_bullet_vs_bunkers(state: &mut GameState) -> Option<CollisionEvent> {
    let bullet = state.cannon_bullet?;
    let bullet_box = cannon_bullet_box(bullet);

    let hit = state.defense.iter_mut().position(|bunker| {
        bullet_box.overlaps(&bunker.hitbox()) && defense::update_by_collision(bunker, bullet.x)
    })?;

    cannon_bullet::destroy(state);
    Some(CollisionEvent::CannonBulletBlocked { bunker: hit })
}

/// First active invader in scan order takes the bullet; only one per tick
fn cannon_bullet_vs_swarm(state: &mut GameState) -> Option<CollisionEvent> {
    let bullet_box = cannon_bullet_box(state.cannon_bullet?);

    let ((row, col), _) = state
        .swarm
        .active()
        .find(|(_, invader)| invader.hitbox().overlaps(&bullet_box))?;

    cannon_bullet::destroy(state);

    let Slot::Active(invader) = &mut state.swarm.grid[row][col] else {
        return None;
    };
    invader.hitpoints = invader.hitpoints.saturating_sub(1);
    let score = invader.score;
    let destroyed = invader.hitpoints == 0;

    if destroyed {
        swarm::destroy(state, (row, col));
        state.award(score);
        log::debug!("Invader ({}, {}) destroyed for {} points", row, col, score);
    }

    Some(CollisionEvent::InvaderHit {
        row,
        col,
        destroyed,
        score: if destroyed { score } else { 0 },
    })
}

fn cannon_bullet_vs_bonus(state: &mut GameState) -> Option<CollisionEvent> {
    let bullet_box = cannon_bullet_box(state.cannon_bullet?);
    let target_box = bonus_box(state.bonus?);
    if !bullet_box.overlaps(&target_box) {
        return None;
    }

    let score = state.tuning.bonus_score(state.shots_fired);
    state.award(score);
    cannon_bullet::destroy(state);
    bonus::destroy(state);
    log::debug!("Bonus target hit for {} points", score);

    Some(CollisionEvent::BonusHit { score })
}

fn invader_bullet_vs_bunkers(state: &mut GameState) -> Option<CollisionEvent> {
    let bullet = state.invader_bullet?;
    let bullet_box = invader_bullet_box(bullet);

    let hit = state.defense.iter_mut().position(|bunker| {
        bullet_box.overlaps(&bunker.hitbox()) && defense::update_by_top_collision(bunker, bullet.x)
    })?;

    invader_bullet::destroy(state);
    Some(CollisionEvent::InvaderBulletBlocked { bunker: hit })
}

fn invader_bullet_vs_cannon(state: &mut GameState) -> Option<CollisionEvent> {
    let bullet_box = invader_bullet_box(state.invader_bullet?);
    if !bullet_box.overlaps(&state.cannon.hitbox()) {
        return None;
    }

    state.cannon.hitpoints = state.cannon.hitpoints.saturating_sub(1);
    invader_bullet::destroy(state);
    log::debug!("Cannon hit, {} hitpoints left", state.cannon.hitpoints);

    Some(CollisionEvent::CannonHit {
        hitpoints_left: state.cannon.hitpoints,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::{CellState, Invader, InvaderTier};
    use glam::Vec2;

    fn quiet_state() -> GameState {
        let mut state = GameState::default();
        state.swarm.grid = [[Slot::Empty; SWARM_ROW_LENGTH]; SWARM_ROWS];
        state
    }

    fn invader_at(x: f32, y: f32, score: u32) -> Slot {
        Slot::Active(Invader {
            position: Vec2::new(x, y),
            width: 12.0,
            tier: InvaderTier::Large,
            hitpoints: 1,
            score,
            frame: 0,
            anim_tick: 0,
        })
    }

    #[test]
    fn test_bullet_destroys_invader() {
        let mut state = quiet_state();
        state.swarm.grid[2][4] = invader_at(100.0, 80.0, 20);
        state.cannon_bullet = Some(Vec2::new(105.0, 84.0));

        let events = resolve(&mut state);

        assert_eq!(
            events,
            vec![CollisionEvent::InvaderHit { row: 2, col: 4, destroyed: true, score: 20 }]
        );
        assert_eq!(state.score, 20);
        assert!(state.cannon_bullet.is_none());
        assert!(matches!(state.swarm.grid[2][4], Slot::Decaying { tick: 0, .. }));
    }

    #[test]
    fn test_one_invader_per_bullet() {
        let mut state = quiet_state();
        // Two invaders stacked so the bullet box overlaps both
        state.swarm.grid[1][0] = invader_at(100.0, 80.0, 30);
        state.swarm.grid[2][0] = invader_at(100.0, 86.0, 10);
        state.cannon_bullet = Some(Vec2::new(104.0, 84.0));

        resolve(&mut state);

        assert!(matches!(state.swarm.grid[1][0], Slot::Decaying { .. }));
        assert!(state.swarm.grid[2][0].is_active());
        assert_eq!(state.score, 30);
    }

    #[test]
    fn test_explosion_does_not_absorb_bullet() {
        let mut state = quiet_state();
        state.swarm.grid[1][0] = Slot::Decaying { position: Vec2::new(100.0, 80.0), tick: 3 };
        state.cannon_bullet = Some(Vec2::new(104.0, 84.0));
        assert!(resolve(&mut state).is_empty());
        assert!(state.cannon_bullet.is_some());
    }

    #[test]
    fn test_tough_invader_survives_first_hit() {
        let mut state = quiet_state();
        let mut slot = invader_at(100.0, 80.0, 40);
        if let Slot::Active(inv) = &mut slot {
            inv.hitpoints = 2;
        }
        state.swarm.grid[0][0] = slot;
        state.cannon_bullet = Some(Vec2::new(104.0, 84.0));

        let events = resolve(&mut state);

        assert_eq!(
            events,
            vec![CollisionEvent::InvaderHit { row: 0, col: 0, destroyed: false, score: 0 }]
        );
        assert_eq!(state.score, 0);
        assert_eq!(state.swarm.grid[0][0].invader().unwrap().hitpoints, 1);
        assert!(state.cannon_bullet.is_none());
    }

    #[test]
    fn test_bunker_wins_over_invader() {
        let mut state = quiet_state();
        let bunker_x = state.defense[0].position.x;
        // An invader sitting on top of the bunker, bullet overlapping both
        state.swarm.grid[4][0] = invader_at(bunker_x, 178.0, 10);
        state.cannon_bullet = Some(Vec2::new(bunker_x + 10.5, 182.0));

        let events = resolve(&mut state);

        assert_eq!(events, vec![CollisionEvent::CannonBulletBlocked { bunker: 0 }]);
        assert!(state.swarm.grid[4][0].is_active());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_shot_through_bunker_reaches_invader() {
        let mut state = quiet_state();
        let bunker_x = state.defense[0].position.x;
        for row in state.defense[0].cells.iter_mut() {
            row[10] = CellState::Destroyed;
        }
        state.swarm.grid[4][0] = invader_at(bunker_x + 4.0, 176.0, 10);
        state.cannon_bullet = Some(Vec2::new(bunker_x + 10.5, 180.0));

        let events = resolve(&mut state);

        assert!(matches!(events[0], CollisionEvent::InvaderHit { destroyed: true, .. }));
        assert_eq!(state.score, 10);
    }

    #[test]
    fn test_bonus_hit_uses_shot_counter() {
        let mut state = quiet_state();
        state.bonus = Some(Vec2::new(50.0, 20.0));
        state.cannon_bullet = Some(Vec2::new(55.0, 22.0));
        state.shots_fired = 8;

        let events = resolve(&mut state);

        assert_eq!(events, vec![CollisionEvent::BonusHit { score: 300 }]);
        assert_eq!(state.score, 300);
        assert!(state.bonus.is_none());
        assert!(state.cannon_bullet.is_none());
    }

    #[test]
    fn test_invader_wins_over_bonus() {
        let mut state = quiet_state();
        // Bonus flying through the swarm, bullet overlapping both
        state.swarm.grid[0][0] = invader_at(50.0, 20.0, 30);
        state.bonus = Some(Vec2::new(50.0, 20.0));
        state.cannon_bullet = Some(Vec2::new(55.0, 22.0));

        let events = resolve(&mut state);

        assert_eq!(
            events,
            vec![CollisionEvent::InvaderHit { row: 0, col: 0, destroyed: true, score: 30 }]
        );
        assert_eq!(state.score, 30);
        assert_eq!(state.bonus, Some(Vec2::new(50.0, 20.0)));
        assert!(state.cannon_bullet.is_none());
    }

    #[test]
    fn test_bunker_shields_cannon() {
        let mut state = quiet_state();
        let bunker = state.defense[1].position;
        // Cannon tucked against the bunker roof, bullet overlapping both
        state.cannon.position = bunker + Vec2::new(4.0, -4.0);
        state.invader_bullet = Some(bunker + Vec2::new(10.5, -3.0));

        let events = resolve(&mut state);

        assert_eq!(events, vec![CollisionEvent::InvaderBulletBlocked { bunker: 1 }]);
        assert_eq!(state.cannon.hitpoints, 3);
        assert_eq!(state.defense[1].cells[0][10], CellState::Destroyed);
        assert!(state.invader_bullet.is_none());
    }

    #[test]
    fn test_invader_bullet_hits_cannon() {
        let mut state = quiet_state();
        let cannon = state.cannon.position;
        state.invader_bullet = Some(cannon + Vec2::new(6.0, 1.0));

        let events = resolve(&mut state);

        assert_eq!(events, vec![CollisionEvent::CannonHit { hitpoints_left: 2 }]);
        assert!(state.invader_bullet.is_none());
    }

    #[test]
    fn test_cannon_hitpoints_never_negative() {
        let mut state = quiet_state();
        state.cannon.hitpoints = 0;
        state.invader_bullet = Some(state.cannon.position);
        resolve(&mut state);
        assert_eq!(state.cannon.hitpoints, 0);
    }

    #[test]
    fn test_invader_bullet_damages_bunker_roof() {
        let mut state = quiet_state();
        let bunker = state.defense[2].position;
        state.invader_bullet = Some(bunker + Vec2::new(10.5, -3.0));

        let events = resolve(&mut state);

        assert_eq!(events, vec![CollisionEvent::InvaderBulletBlocked { bunker: 2 }]);
        assert_eq!(state.defense[2].cells[0][10], CellState::Destroyed);
        assert!(state.invader_bullet.is_none());
    }

    #[test]
    fn test_both_bullets_resolve_same_tick() {
        let mut state = quiet_state();
        state.swarm.grid[0][0] = invader_at(100.0, 80.0, 30);
        state.cannon_bullet = Some(Vec2::new(104.0, 84.0));
        state.invader_bullet = Some(state.cannon.position + Vec2::new(2.0, 0.0));

        let events = resolve(&mut state);

        assert_eq!(events.len(), 2);
        assert_eq!(state.score, 30);
        assert_eq!(state.cannon.hitpoints, 2);
    }
}
