//! Arena Configuration
//!
//! Every gameplay constant in one serde struct. `Default` is the classic
//! arena: 100-unit cells, 100 Hz physics, five bots.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ArenaError, Result};
use crate::physics::BulletTuning;
use crate::player::BodyTuning;
use crate::world::{DEFAULT_ARENA_LAYOUT, GridMap};

/// Central configuration for an arena session.
///
/// Missing JSON fields fall back to their defaults, so a config file only
/// needs the values it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Cell width and depth in world units
    pub horizontal_unit: f32,
    /// Short wall height; tall walls are three of these
    pub vertical_unit: f32,
    /// Simulation tick length in seconds
    pub fixed_step_s: f32,
    /// Longest frame delta fed into the accumulator
    pub max_frame_delta_s: f32,
    /// Minimum time between two bot shots
    pub firing_delay_ms: f64,
    /// Time between bot movement decisions
    pub bot_move_delay_ms: f64,
    /// Per-axis bot aim error bound, in degrees
    pub bot_max_axial_error_deg: f32,
    /// Per-axis player aim error bound, in degrees
    pub player_max_axial_error_deg: f32,
    pub bot_count: usize,
    /// RNG seed for bot decisions, aim error and spawn choice
    pub seed: u64,
    /// Seconds the player waits before respawning
    pub respawn_countdown_s: f32,
    /// Map text, one row per line
    pub layout: String,
    pub body: BodyTuning,
    pub bullet: BulletTuning,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            horizontal_unit: 100.0,
            vertical_unit: 100.0,
            fixed_step_s: 0.01,
            max_frame_delta_s: 0.25,
            firing_delay_ms: 1000.0,
            bot_move_delay_ms: 2000.0,
            bot_max_axial_error_deg: 10.0,
            player_max_axial_error_deg: 10.0,
            bot_count: 5,
            seed: 0x5eed,
            respawn_countdown_s: 3.0,
            layout: DEFAULT_ARENA_LAYOUT.to_string(),
            body: BodyTuning::default(),
            bullet: BulletTuning::default(),
        }
    }
}

impl ArenaConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        tracing::info!(path = %path.display(), "loaded arena config");
        Ok(config)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("horizontal_unit", self.horizontal_unit),
            ("vertical_unit", self.vertical_unit),
            ("fixed_step_s", self.fixed_step_s),
            ("respawn_countdown_s", self.respawn_countdown_s),
            ("body.speed", self.body.speed),
            ("body.radius", self.body.radius),
            ("body.camera_height", self.body.camera_height),
            ("bullet.speed", self.bullet.speed),
            ("bullet.radius", self.bullet.radius),
            ("bullet.altitude_cutoff_units", self.bullet.altitude_cutoff_units),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(ArenaError::Config(format!("{name} must be positive, got {value}")));
            }
        }
        if !(self.firing_delay_ms > 0.0) || !(self.bot_move_delay_ms > 0.0) {
            return Err(ArenaError::Config("bot delays must be positive".into()));
        }
        if self.body.max_health <= 0 {
            return Err(ArenaError::Config("body.max_health must be positive".into()));
        }
        if self.max_frame_delta_s < self.fixed_step_s {
            return Err(ArenaError::Config(format!(
                "max_frame_delta_s ({}) is shorter than fixed_step_s ({})",
                self.max_frame_delta_s, self.fixed_step_s
            )));
        }
        self.build_map()?;
        Ok(())
    }

    /// Parse the configured layout with the configured cell size.
    pub fn build_map(&self) -> Result<GridMap> {
        GridMap::parse(&self.layout, self.horizontal_unit, self.vertical_unit)
    }

    /// Altitude above which bullets are discarded, in world units.
    pub fn bullet_altitude_cutoff(&self) -> f32 {
        self.bullet.altitude_cutoff_units * self.vertical_unit
    }
}
