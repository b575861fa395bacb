//! Presentation settings
//!
//! Nothing here touches the simulation; these only shape the render pass.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Display preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Viewport width in pixels
    pub viewport_width: f32,
    /// Viewport height in pixels
    pub viewport_height: f32,

    /// Outline every collision box (debug)
    pub show_hitboxes: bool,
    /// Tint entities by vertical band (red top, green bottom)
    pub zone_colors: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            // 3x the game area
            viewport_width: 768.0,
            viewport_height: 672.0,

            show_hitboxes: false,
            zone_colors: true,
        }
    }
}

impl Settings {
    /// Parse settings from JSON (missing keys keep their defaults)
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        if !(settings.viewport_width > 0.0 && settings.viewport_height > 0.0) {
            return Err(ConfigError::Invalid {
                field: "viewport_width/viewport_height",
                reason: "must be positive",
            });
        }
        Ok(settings)
    }

    /// Read settings from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
