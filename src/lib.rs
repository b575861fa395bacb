//! Cannon Invaders - a fixed-timestep invaders-vs-cannon arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (actors, collisions, game state)
//! - `renderer`: Draw-primitive boundary and the read-only render pass
//! - `driver`: Fixed timestep frame driver (update, then render)
//! - `tuning`: Data-driven game balance
//! - `settings`: Presentation options

pub mod driver;
pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use driver::FrameDriver;
pub use error::ConfigError;
pub use settings::Settings;
pub use tuning::Tuning;

/// Fixed geometry of the playfield and its entities (game-area units, not pixels)
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one swarm step per frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Game area dimensions
    pub const GAME_AREA_WIDTH: f32 = 256.0;
    pub const GAME_AREA_HEIGHT: f32 = 224.0;

    /// Colour bands (Y below RED_ZONE is red, Y at or past GREEN_ZONE is green)
    pub const RED_ZONE: f32 = 30.0;
    pub const GREEN_ZONE: f32 = 180.0;

    /// Cannon box
    pub const CANNON_WIDTH: f32 = 13.0;
    pub const CANNON_HEIGHT: f32 = 7.0;
    /// Gap between the cannon and the bottom edge
    pub const CANNON_BOTTOM_OFFSET: f32 = 5.0;

    /// Cannon bullet box
    pub const BULLET_WIDTH: f32 = 1.0;
    pub const BULLET_HEIGHT: f32 = 5.0;

    /// Invader bullet box
    pub const INVADER_BULLET_WIDTH: f32 = 1.0;
    pub const INVADER_BULLET_HEIGHT: f32 = 5.0;

    /// Swarm grid
    pub const SWARM_ROWS: usize = 5;
    pub const SWARM_ROW_LENGTH: usize = 11;
    /// Width of one grid column (the widest invader tier)
    pub const INVADER_CELL_WIDTH: f32 = 12.0;
    pub const INVADER_HEIGHT: f32 = 8.0;
    pub const INVADER_VERTICAL_GAP: f32 = 10.0;
    pub const INVADER_HORIZONTAL_GAP: f32 = INVADER_CELL_WIDTH / 2.0;
    pub const INVADER_INITIAL_TOP: f32 = 40.0;

    /// Defense line
    pub const BUNKER_COUNT: usize = 4;
    pub const BUNKER_WIDTH: usize = 20;
    pub const BUNKER_HEIGHT: usize = 20;
    pub const DEFENSE_INITIAL_TOP: f32 = 180.0;

    /// Bonus target box and lane
    pub const BONUS_WIDTH: f32 = 10.0;
    pub const BONUS_HEIGHT: f32 = 5.0;
    pub const BONUS_START_X: f32 = 0.0;
    pub const BONUS_LANE_Y: f32 = 20.0;
}
