//! Cannon Invaders entry point
//!
//! Headless native host: plays one match with a simple autopilot, rendering
//! every tick into a recording viewport, and reports the outcome.
//!
//! Usage: `cannon-invaders [TUNING_JSON] [SEED] [SETTINGS_JSON]`

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use cannon_invaders::consts::*;
    use cannon_invaders::renderer::DrawList;
    use cannon_invaders::sim::GameState;
    use cannon_invaders::sim::collision::CollisionEvent;
    use cannon_invaders::sim::invader_bullet::eligible_shooters;
    use cannon_invaders::sim::state::GamePhase;
    use cannon_invaders::sim::tick::TickInput;
    use cannon_invaders::{FrameDriver, Settings, Tuning};

    /// Ten minutes of play at 60 Hz
    const MAX_TICKS: u64 = 60 * 60 * 10;
    /// How far above the cannon an invader bullet makes the autopilot dodge
    const DODGE_RANGE: f32 = 40.0;

    pub fn run() {
        let mut args = std::env::args().skip(1);

        let tuning = match args.next() {
            Some(path) => Tuning::load(&path).unwrap_or_else(|e| {
                log::warn!("Ignoring tuning file {}: {}", path, e);
                Tuning::default()
            }),
            None => Tuning::default(),
        };
        let seed = args
            .next()
            .and_then(|s| {
                s.parse::<u64>()
                    .map_err(|e| log::warn!("Ignoring seed {:?}: {}", s, e))
                    .ok()
            })
            .unwrap_or(0xC0FFEE);
        let settings = match args.next() {
            Some(path) => Settings::load(&path).unwrap_or_else(|e| {
                log::warn!("Ignoring settings file {}: {}", path, e);
                Settings::default()
            }),
            None => Settings::default(),
        };

        log::info!("Cannon Invaders (headless) starting, seed {}", seed);

        let mut driver = FrameDriver::seeded(tuning, seed);
        let mut viewport = DrawList::new();

        let mut blocked = 0u32;
        let mut bonus_hits = 0u32;
        while !driver.is_over() && driver.state().time_ticks < MAX_TICKS {
            driver.set_input(autopilot(driver.state()));
            for event in driver.step() {
                match event {
                    CollisionEvent::CannonBulletBlocked { .. }
                    | CollisionEvent::InvaderBulletBlocked { .. } => blocked += 1,
                    CollisionEvent::BonusHit { score } => {
                        bonus_hits += 1;
                        log::info!("Bonus target down for {} points", score);
                    }
                    CollisionEvent::CannonHit { hitpoints_left } => {
                        log::info!("Cannon hit, {} lives left", hitpoints_left);
                    }
                    CollisionEvent::InvaderHit { .. } => {}
                }
            }
            driver.render(&mut viewport, &settings);
        }

        let state = driver.state();
        let outcome = match state.phase {
            GamePhase::GameOver(reason) => format!("{:?}", reason),
            GamePhase::Playing => "tick limit".to_string(),
        };
        log::info!(
            "Finished after {} ticks: {} ({} draw commands in last frame)",
            state.time_ticks,
            outcome,
            viewport.len()
        );
        println!(
            "score {} | lives {} | invaders left {} | shots {} | bonus {} | blocked {} | {}",
            state.score,
            state.cannon.hitpoints,
            state.swarm.active_count(),
            state.shots_fired,
            bonus_hits,
            blocked,
            outcome
        );
    }

    /// Steer under the nearest invader that can shoot back, dodge falling
    /// bullets, fire whenever possible
    fn autopilot(state: &GameState) -> TickInput {
        let center = state.cannon.position.x + CANNON_WIDTH / 2.0;

        let threat = state.invader_bullet.filter(|b| {
            let dy = state.cannon.position.y - b.y;
            (0.0..DODGE_RANGE).contains(&dy) && (b.x - center).abs() < CANNON_WIDTH
        });
        if let Some(bullet) = threat {
            let go_left = bullet.x >= center;
            return TickInput {
                left: go_left,
                right: !go_left,
                fire: false,
            };
        }

        let target = eligible_shooters(&state.swarm.grid)
            .into_iter()
            .filter_map(|(r, c)| state.swarm.grid[r][c].invader())
            .map(|inv| inv.position.x + inv.width / 2.0)
            .min_by(|a, b| (a - center).abs().total_cmp(&(b - center).abs()));

        let (left, right) = match target {
            Some(x) if x < center - 1.0 => (true, false),
            Some(x) if x > center + 1.0 => (false, true),
            _ => (false, false),
        };

        TickInput {
            left,
            right,
            fire: true,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser host; the library is driven by an embedding page
}
