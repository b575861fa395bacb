//! Fixed timestep frame driver
//!
//! The host calls [`FrameDriver::advance`] with wall-clock frame time and then
//! [`FrameDriver::render`]. Whole ticks run to completion before render can
//! observe the state, so a frame never shows a half-applied tick.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::renderer::{self, Viewport};
use crate::settings::Settings;
use crate::sim::collision::CollisionEvent;
use crate::sim::dice::Dice;
use crate::sim::state::GameState;
use crate::sim::tick::{TickInput, tick};
use crate::tuning::Tuning;

/// Longest frame time accepted in one advance (seconds)
const MAX_FRAME_TIME: f32 = 0.1;

/// Owns a match and the randomness it draws from
pub struct FrameDriver<D: Dice> {
    state: GameState,
    dice: D,
    input: TickInput,
    accumulator: f32,
    events: Vec<CollisionEvent>,
}

impl FrameDriver<Pcg32> {
    /// Match driven by a seeded PCG generator
    pub fn seeded(tuning: Tuning, seed: u64) -> Self {
        log::debug!("Seeding dice with {}", seed);
        Self::new(tuning, Pcg32::seed_from_u64(seed))
    }
}

impl<D: Dice> FrameDriver<D> {
    pub fn new(tuning: Tuning, dice: D) -> Self {
        log::info!("New match started");
        Self {
            state: GameState::new(tuning),
            dice,
            input: TickInput::default(),
            accumulator: 0.0,
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Input for the following ticks. Fire is consumed by the next tick.
    pub fn set_input(&mut self, input: TickInput) {
        self.input = input;
    }

    pub fn input(&self) -> TickInput {
        self.input
    }

    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Collisions resolved by the ticks of the last `advance`
    pub fn events(&self) -> &[CollisionEvent] {
        &self.events
    }

    /// Run as many whole ticks as `dt` seconds cover. Returns how many ran.
    pub fn advance(&mut self, dt: f32) -> u32 {
        if !dt.is_finite() || dt <= 0.0 {
            self.events.clear();
            return 0;
        }
        self.accumulator += dt.min(MAX_FRAME_TIME);
        self.events.clear();

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let events = self.step();
            self.events.extend(events);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }

        substeps
    }

    /// Run exactly one tick with the current input, returning its collisions
    pub fn step(&mut self) -> Vec<CollisionEvent> {
        self.state.input = self.input;
        let events = tick(&mut self.state, &mut self.dice);

        // Clear one-shot inputs after processing
        self.input.fire = false;
        events
    }

    /// Draw the state as of the last completed tick
    pub fn render<V: Viewport + ?Sized>(&self, viewport: &mut V, settings: &Settings) {
        renderer::render(&self.state, viewport, settings);
    }
}
