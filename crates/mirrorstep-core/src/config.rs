//! Movement configuration

use crate::error::{MirrorstepError, Result};
use crate::layer::LayerMask;
use serde::{Deserialize, Serialize};

/// Tunables for twin movement.
///
/// Every field falls back to its default when omitted from a TOML table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// World units per grid cell
    pub grid_size: f32,
    /// Move cycles per second; one cycle lasts `1 / move_speed` seconds
    pub move_speed: f32,
    /// Partial displacement shown when a twin is blocked
    pub bump_distance: f32,
    /// Radius of the disc probed at the candidate cell
    pub collision_radius: f32,
    /// Layers that count as obstacles
    pub obstacle_layers: LayerMask,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            grid_size: 1.0,
            move_speed: 5.0,
            bump_distance: 0.2,
            collision_radius: 0.4,
            obstacle_layers: LayerMask::ALL,
        }
    }
}

impl MovementConfig {
    /// Parse a config from a TOML table and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: MovementConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Length of one move cycle in seconds
    pub fn cycle_duration(&self) -> f64 {
        1.0 / self.move_speed as f64
    }

    /// Check that every value is usable by the animator and the obstacle probe
    pub fn validate(&self) -> Result<()> {
        check_positive("grid_size", self.grid_size)?;
        check_positive("move_speed", self.move_speed)?;
        check_positive("collision_radius", self.collision_radius)?;

        // A bump must never cross into the next cell
        if !self.bump_distance.is_finite()
            || self.bump_distance < 0.0
            || self.bump_distance >= self.grid_size
        {
            return Err(out_of_range(
                "bump_distance",
                0.0,
                self.grid_size as f64,
                self.bump_distance,
            ));
        }

        Ok(())
    }
}

fn check_positive(field: &str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(out_of_range(field, f64::MIN_POSITIVE, f64::MAX, value))
    }
}

fn out_of_range(field: &str, min: f64, max: f64, value: f32) -> MirrorstepError {
    MirrorstepError::ValueOutOfRange {
        field: field.to_string(),
        min,
        max,
        value: value as f64,
    }
}
