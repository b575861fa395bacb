//! Game state and core simulation types
//!
//! [`GameState`] is the single ownership root of a match. Actors receive it by
//! exclusive reference one at a time; nothing else holds entity state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Aabb, Point};
use super::tick::TickInput;
use super::{cannon, defense, swarm};
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ticks advance the simulation
    Playing,
    /// Terminal; ticks are no-ops, rendering continues
    GameOver(GameOverReason),
}

/// Why a match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    /// Cannon hitpoints reached zero
    CannonDestroyed,
    /// Every swarm slot is empty
    SwarmCleared,
    /// An invader reached the invasion line
    Invaded,
}

/// Invader size class (sprite, box width and score)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvaderTier {
    Small,
    Medium,
    Large,
}

impl InvaderTier {
    /// Collision box width
    pub fn width(self) -> f32 {
        match self {
            InvaderTier::Small => 8.0,
            InvaderTier::Medium => 11.0,
            InvaderTier::Large => 12.0,
        }
    }
}

/// A live invader
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Invader {
    pub position: Point,
    pub width: f32,
    pub tier: InvaderTier,
    pub hitpoints: u8,
    pub score: u32,
    /// Animation frame, always 0 or 1
    pub frame: u8,
    /// Ticks since the last frame flip
    pub anim_tick: u32,
}

impl Invader {
    pub fn hitbox(&self) -> Aabb {
        Aabb::new(self.position, self.width, INVADER_HEIGHT)
    }
}

/// One cell of the swarm grid
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Slot {
    /// Nothing here, forever
    #[default]
    Empty,
    /// A live invader
    Active(Invader),
    /// Explosion left by a destroyed invader, cleared after its tick budget
    Decaying { position: Point, tick: u32 },
}

impl Slot {
    pub fn is_active(&self) -> bool {
        matches!(self, Slot::Active(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    pub fn invader(&self) -> Option<&Invader> {
        match self {
            Slot::Active(invader) => Some(invader),
            Slot::Empty | Slot::Decaying { .. } => None,
        }
    }
}

/// Horizontal heading of the swarm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heading {
    Left,
    Right,
}

impl Heading {
    /// -1 for left, +1 for right
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Heading::Left => -1.0,
            Heading::Right => 1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }
}

/// Fixed grid of invader slots, row-major, top row first
pub type SwarmGrid = [[Slot; SWARM_ROW_LENGTH]; SWARM_ROWS];

/// The invader formation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Swarm {
    pub grid: SwarmGrid,
    pub heading: Heading,
    /// Horizontal step per tick; grows on every reversal
    pub speed: f32,
}

impl Swarm {
    /// Iterate active invaders with their (row, column)
    pub fn active(&self) -> impl Iterator<Item = ((usize, usize), &Invader)> {
        self.grid.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(c, slot)| slot.invader().map(|inv| ((r, c), inv)))
        })
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    /// True once every slot has fully decayed to empty
    pub fn all_empty(&self) -> bool {
        self.grid.iter().flatten().all(Slot::is_empty)
    }

    /// True if any active invader has advanced to `line`
    pub fn reached(&self, line: f32) -> bool {
        self.active().any(|(_, inv)| inv.position.y >= line)
    }
}

/// State of one destructible bunker cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Intact,
    Destroyed,
    /// Outside the bunker silhouette: never damaged, never drawn
    Unused,
}

/// Cell grid of one bunker, `cells[row][col]`, row 0 at the top
pub type BunkerCells = [[CellState; BUNKER_WIDTH]; BUNKER_HEIGHT];

/// A destructible bunker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bunker {
    /// Top-left corner; one cell is one game-area unit
    pub position: Point,
    pub cells: BunkerCells,
}

impl Bunker {
    pub fn hitbox(&self) -> Aabb {
        Aabb::new(self.position, BUNKER_WIDTH as f32, BUNKER_HEIGHT as f32)
    }

    pub fn intact_cells(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| **c == CellState::Intact)
            .count()
    }
}

/// The defending unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cannon {
    /// Top-left corner; Y never changes
    pub position: Point,
    pub hitpoints: u8,
}

impl Cannon {
    pub fn hitbox(&self) -> Aabb {
        Aabb::new(self.position, CANNON_WIDTH, CANNON_HEIGHT)
    }
}

/// Box of the cannon bullet at `pos`
pub fn cannon_bullet_box(pos: Point) -> Aabb {
    Aabb::new(pos, BULLET_WIDTH, BULLET_HEIGHT)
}

/// Box of the invader bullet at `pos`
pub fn invader_bullet_box(pos: Point) -> Aabb {
    Aabb::new(pos, INVADER_BULLET_WIDTH, INVADER_BULLET_HEIGHT)
}

/// Box of the bonus target at `pos`
pub fn bonus_box(pos: Point) -> Aabb {
    Aabb::new(pos, BONUS_WIDTH, BONUS_HEIGHT)
}

/// Complete match state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Balance values the actors read
    pub tuning: Tuning,
    /// Input flags, written by the host between ticks
    pub input: TickInput,
    /// Only ever increases
    pub score: u32,
    pub cannon: Cannon,
    /// At most one cannon bullet in flight
    pub cannon_bullet: Option<Point>,
    /// At most one invader bullet in flight
    pub invader_bullet: Option<Point>,
    pub swarm: Swarm,
    pub defense: [Bunker; BUNKER_COUNT],
    pub bonus: Option<Point>,
    /// Cannon bullets fired this match (indexes the bonus score table)
    pub shots_fired: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
}

impl GameState {
    /// Fresh match with the given balance values
    pub fn new(tuning: Tuning) -> Self {
        let cannon = Cannon {
            position: cannon::init_at(),
            hitpoints: tuning.cannon_hitpoints,
        };
        let swarm = swarm::init(&tuning);

        Self {
            tuning,
            input: TickInput::default(),
            score: 0,
            cannon,
            cannon_bullet: None,
            invader_bullet: None,
            swarm,
            defense: defense::init(),
            bonus: None,
            shots_fired: 0,
            time_ticks: 0,
            phase: GamePhase::Playing,
        }
    }

    /// Why the match is over, if it is
    pub fn termination(&self) -> Option<GameOverReason> {
        if self.cannon.hitpoints == 0 {
            Some(GameOverReason::CannonDestroyed)
        } else if self.swarm.all_empty() {
            Some(GameOverReason::SwarmCleared)
        } else if self.swarm.reached(self.tuning.invasion_line) {
            Some(GameOverReason::Invaded)
        } else {
            None
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.termination().is_some()
    }

    /// Add to the score
    pub fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

/// Offset that centers an invader of `width` in its grid column
pub fn column_inset(width: f32) -> Vec2 {
    Vec2::new((INVADER_CELL_WIDTH - width) / 2.0, 0.0)
}
