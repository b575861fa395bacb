//! Data-driven game balance
//!
//! Every speed, probability and score the actors use comes from [`Tuning`].
//! A JSON file can override any subset of fields; missing keys fall back to
//! the defaults below, which reproduce the classic cabinet feel.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{GAME_AREA_HEIGHT, GAME_AREA_WIDTH, SWARM_ROWS};
use crate::error::ConfigError;
use crate::sim::state::InvaderTier;

/// Number of entries in the bonus "mystery score" table
pub const BONUS_SCORE_TABLE_LEN: usize = 15;

const BASE_SWARM_SPEED: f32 = GAME_AREA_WIDTH / 1400.0;

/// Runtime-tunable gameplay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Cannon ===
    /// Horizontal step per tick while a direction is held
    pub cannon_speed: f32,
    /// Hits the cannon can take before the match ends
    pub cannon_hitpoints: u8,

    // === Projectiles ===
    /// Upward step of the cannon bullet per tick
    pub bullet_speed: f32,
    /// Downward step of the invader bullet per tick
    pub invader_bullet_speed: f32,

    // === Swarm ===
    /// Horizontal step of every invader per tick at match start
    pub swarm_base_speed: f32,
    /// Added to the swarm speed on every direction reversal
    pub swarm_speed_increment: f32,
    /// Vertical drop applied on every direction reversal
    pub swarm_drop: f32,
    /// Ticks an explosion stays in its slot before the slot clears
    pub decay_ticks: u32,
    /// Ticks between animation frame flips
    pub animation_period: u32,
    /// Y at which an advancing invader ends the match
    pub invasion_line: f32,
    /// Invader tier for each grid row, top row first
    pub tier_by_row: [InvaderTier; SWARM_ROWS],
    pub small_invader_score: u32,
    pub medium_invader_score: u32,
    pub large_invader_score: u32,

    // === Bonus target ===
    /// Horizontal step of the bonus target per tick
    pub bonus_speed: f32,
    /// Spawn odds are one in this many per tick
    pub bonus_spawn_factor: u32,
    /// Score table indexed by shots fired (modulo its length)
    pub bonus_scores: [u32; BONUS_SCORE_TABLE_LEN],
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            cannon_speed: 1.5,
            cannon_hitpoints: 3,

            bullet_speed: GAME_AREA_HEIGHT / 60.0,
            invader_bullet_speed: GAME_AREA_HEIGHT / 200.0,

            swarm_base_speed: BASE_SWARM_SPEED,
            swarm_speed_increment: BASE_SWARM_SPEED / 6.0,
            swarm_drop: 3.0,
            decay_ticks: 15,
            animation_period: 30,
            invasion_line: 172.0,
            tier_by_row: [
                InvaderTier::Small,
                InvaderTier::Medium,
                InvaderTier::Medium,
                InvaderTier::Large,
                InvaderTier::Large,
            ],
            small_invader_score: 30,
            medium_invader_score: 20,
            large_invader_score: 10,

            bonus_speed: GAME_AREA_WIDTH / 400.0,
            bonus_spawn_factor: 300,
            bonus_scores: [
                100, 50, 50, 100, 150, 100, 100, 50, 300, 100, 100, 100, 50, 150, 100,
            ],
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON (missing keys keep their defaults) and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read and parse a tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reject values the actors cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let speeds = [
            ("cannon_speed", self.cannon_speed),
            ("bullet_speed", self.bullet_speed),
            ("invader_bullet_speed", self.invader_bullet_speed),
            ("swarm_base_speed", self.swarm_base_speed),
            ("swarm_speed_increment", self.swarm_speed_increment),
            ("swarm_drop", self.swarm_drop),
            ("bonus_speed", self.bonus_speed),
        ];
        for (field, value) in speeds {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be a finite, non-negative number",
                });
            }
        }

        if self.cannon_hitpoints == 0 {
            return Err(ConfigError::Invalid {
                field: "cannon_hitpoints",
                reason: "must be at least 1",
            });
        }
        if self.bonus_spawn_factor == 0 {
            return Err(ConfigError::Invalid {
                field: "bonus_spawn_factor",
                reason: "must be at least 1",
            });
        }
        if self.animation_period == 0 {
            return Err(ConfigError::Invalid {
                field: "animation_period",
                reason: "must be at least 1",
            });
        }
        if self.decay_ticks == u32::MAX {
            return Err(ConfigError::Invalid {
                field: "decay_ticks",
                reason: "explosions would never clear",
            });
        }
        if !self.invasion_line.is_finite() {
            return Err(ConfigError::Invalid {
                field: "invasion_line",
                reason: "must be a finite number",
            });
        }

        Ok(())
    }

    /// Score awarded for destroying an invader of the given tier
    pub fn invader_score(&self, tier: InvaderTier) -> u32 {
        match tier {
            InvaderTier::Small => self.small_invader_score,
            InvaderTier::Medium => self.medium_invader_score,
            InvaderTier::Large => self.large_invader_score,
        }
    }

    /// Bonus target score for the given number of shots fired so far
    pub fn bonus_score(&self, shots_fired: u32) -> u32 {
        self.bonus_scores[shots_fired as usize % BONUS_SCORE_TABLE_LEN]
    }
}
