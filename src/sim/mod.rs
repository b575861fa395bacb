//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Randomness only through an injected [`Dice`]
//! - Stable iteration order (row-major over the swarm grid)
//! - No rendering or platform dependencies

pub mod bonus;
pub mod cannon;
pub mod cannon_bullet;
pub mod collision;
pub mod defense;
pub mod dice;
pub mod geometry;
pub mod invader_bullet;
pub mod state;
pub mod swarm;
pub mod tick;

pub use collision::{CollisionEvent, resolve};
pub use dice::{Dice, ScriptedDice};
pub use geometry::{Aabb, Point, Shape};
pub use state::{
    Bunker, Cannon, CellState, GameOverReason, GamePhase, GameState, Heading, Invader,
    InvaderTier, Slot, Swarm,
};
pub use tick::{TickInput, tick};
