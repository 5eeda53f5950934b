//! Scene parameters.
//!
//! The layout and motion of the sprite grid can be described in JSON.
//! Anything missing from the document keeps its default, which reproduces the
//! classic 6 x 16 wave.

use serde::Deserialize;

use crate::debug_log::Subsystems::Config;
use crate::shared_constants::{NUM_GRADIENT_TILES, NUM_HUES};

/// The error returned when a scene description can't be used.
#[derive(Debug)]
pub enum ConfigError {
    Json(serde_json::Error),
    /// Each color needs its own palette bank.
    TooManyColors(usize),
    /// Each lane is drawn with its own tile.
    TooManyLanes(usize),
    EmptyScene,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use ConfigError::*;
        match self {
            Json(err) => write!(f, "ConfigError: Couldn't parse scene description: {}", err),
            TooManyColors(n) => write!(
                f,
                "ConfigError: {} colors requested, but only {} palette banks are set up",
                n, NUM_HUES
            ),
            TooManyLanes(n) => write!(
                f,
                "ConfigError: {} lanes requested, but only {} tiles are generated",
                n, NUM_GRADIENT_TILES
            ),
            EmptyScene => write!(f, "ConfigError: Scene needs at least one color and one lane"),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        return ConfigError::Json(err);
    }
}

/// Describes the sprite grid and how it moves.
///
/// Sprite (color `c`, lane `i`) starts at
/// `(lane_spacing * i - color_stagger * c, start_y)` and bobs around `center_y`
/// with the given amplitude; its phase is
/// `angle * (c + 1) + lane_phase * i + color_phase * c` degrees.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    pub colors: usize,
    pub lanes: usize,
    /// Vertical amplitude in pixels.
    pub amplitude: i16,
    pub center_y: i16,
    pub start_y: i16,
    pub lane_spacing: i16,
    pub color_stagger: i16,
    /// Phase offset between neighbouring lanes, in degrees.
    pub lane_phase: u32,
    /// Phase offset between neighbouring colors, in degrees.
    pub color_phase: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        return SceneConfig {
            colors: 6,
            lanes: 16,
            amplitude: 40,
            center_y: 76,
            start_y: 80,
            lane_spacing: 16,
            color_stagger: 8,
            lane_phase: 16,
            color_phase: 45,
        };
    }
}

impl SceneConfig {
    /// Parses and validates a JSON scene description.
    pub fn from_json(json: &str) -> Result<SceneConfig, ConfigError> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        debug_log!(
            Config,
            "Loaded scene with {} colors and {} lanes",
            config.colors,
            config.lanes
        );
        return Ok(config);
    }

    /// Checks that the scene fits the hardware resources set up for it.
    ///
    /// Limiting colors and lanes also keeps the sprite count below the number of OAM slots.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.colors == 0 || self.lanes == 0 {
            return Err(ConfigError::EmptyScene);
        }
        if self.colors > NUM_HUES {
            return Err(ConfigError::TooManyColors(self.colors));
        }
        if self.lanes > NUM_GRADIENT_TILES {
            return Err(ConfigError::TooManyLanes(self.lanes));
        }
        return Ok(());
    }

    /// Number of sprites the scene allocates.
    pub fn sprite_count(&self) -> usize {
        return self.colors * self.lanes;
    }
}
