//! Spawner configuration.
//!
//! All values are fixed once the simulation is constructed. Missing JSON
//! fields fall back to the defaults in [`crate::constants`].

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;

/// Tuning for wave size, cadence, placement and enemy speed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnerConfig {
    /// Enemies created by the first wave.
    pub spawn_count: u32,
    /// Seconds between waves once armed.
    pub spawn_interval_secs: f32,
    /// Radius of the spawn ring around the player.
    pub spawn_radius: f32,
    /// Added to `spawn_count` after every wave.
    pub difficulty_bonus: u32,
    pub min_speed: f32,
    pub max_speed: f32,
    /// Vertical offset of spawned enemies above the player.
    pub ground_clearance: f32,
    /// Spawn one wave as soon as the simulation is created, before arming.
    pub spawn_initial_wave: bool,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            spawn_count: DEFAULT_SPAWN_COUNT,
            spawn_interval_secs: DEFAULT_SPAWN_INTERVAL_SECS,
            spawn_radius: DEFAULT_SPAWN_RADIUS,
            difficulty_bonus: DEFAULT_DIFFICULTY_BONUS,
            min_speed: DEFAULT_MIN_SPEED,
            max_speed: DEFAULT_MAX_SPEED,
            ground_clearance: DEFAULT_GROUND_CLEARANCE,
            spawn_initial_wave: true,
        }
    }
}

impl SpawnerConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make placement or speed sampling meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.spawn_radius.is_finite() || self.spawn_radius <= 0.0 {
            return Err(ConfigError::invalid(
                "spawn_radius",
                format!("must be positive, got {}", self.spawn_radius),
            ));
        }
        if !self.spawn_interval_secs.is_finite() || self.spawn_interval_secs <= 0.0 {
            return Err(ConfigError::invalid(
                "spawn_interval_secs",
                format!("must be positive, got {}", self.spawn_interval_secs),
            ));
        }
        if !self.ground_clearance.is_finite() {
            return Err(ConfigError::invalid("ground_clearance", "must be finite"));
        }
        for (field, value) in [("min_speed", self.min_speed), ("max_speed", self.max_speed)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::invalid(
                    field,
                    format!("must be a non-negative number, got {value}"),
                ));
            }
        }
        if self.min_speed > self.max_speed {
            return Err(ConfigError::invalid(
                "min_speed",
                format!(
                    "{} exceeds max_speed {}",
                    self.min_speed, self.max_speed
                ),
            ));
        }
        Ok(())
    }
}
