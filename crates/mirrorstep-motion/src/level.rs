//! Level files: twin start cells, obstacles and movement tuning in TOML
//!
//! ```toml
//! [level]
//! name = "first_steps"
//!
//! [movement]
//! move_speed = 5.0
//!
//! [characters]
//! primary = [1.0, 0.0, 0.0]
//! mirrored = [-1.0, 0.0, 0.0]
//!
//! [[obstacles]]
//! cell = [2, 0]
//! ```

use crate::controller::TwinController;
use crate::obstacle::ObstacleMap;
use mirrorstep_core::{LayerMask, MirrorstepError, MovementConfig, Result, Vec3};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Root structure of a level TOML file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelFile {
    pub level: LevelMetadata,
    #[serde(default)]
    pub movement: MovementConfig,
    pub characters: StartPositions,
    #[serde(default)]
    pub obstacles: Vec<ObstacleDef>,
}

/// Level metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelMetadata {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Where each twin starts
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StartPositions {
    pub primary: Vec3,
    pub mirrored: Vec3,
}

/// A blocked grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObstacleDef {
    /// Cell coordinates in grid units
    pub cell: [i32; 2],
    #[serde(default)]
    pub layer: u8,
}

/// Load a level from a TOML file
pub fn load_level<P: AsRef<Path>>(path: P) -> Result<LevelFile> {
    let content = fs::read_to_string(path)?;
    load_level_str(&content)
}

/// Load a level from a TOML string
pub fn load_level_str(content: &str) -> Result<LevelFile> {
    let level: LevelFile = toml::from_str(content)?;
    level.validate()?;
    Ok(level)
}

impl LevelFile {
    /// A small level with one wall in front of the primary twin
    pub fn sample(name: &str) -> Self {
        Self {
            level: LevelMetadata {
                name: name.to_string(),
                description: Some("Two twins, one wall".to_string()),
            },
            movement: MovementConfig::default(),
            characters: StartPositions {
                primary: Vec3::planar(1.0, 0.0),
                mirrored: Vec3::planar(-1.0, 0.0),
            },
            obstacles: vec![
                ObstacleDef {
                    cell: [2, 0],
                    layer: 0,
                },
                ObstacleDef {
                    cell: [-1, 2],
                    layer: 0,
                },
            ],
        }
    }

    /// Check tuning values, start cells and obstacle layers
    pub fn validate(&self) -> Result<()> {
        self.movement.validate()?;

        let grid = self.movement.grid_size;
        for (role, pos) in [
            ("primary", self.characters.primary),
            ("mirrored", self.characters.mirrored),
        ] {
            if !pos.is_grid_aligned(grid, 1e-4) {
                return Err(MirrorstepError::Level(format!(
                    "{} start {:?} is not on the grid",
                    role,
                    pos.to_array()
                )));
            }
        }

        if let Some(bad) = self
            .obstacles
            .iter()
            .find(|o| o.layer >= LayerMask::LAYER_COUNT)
        {
            return Err(MirrorstepError::Level(format!(
                "obstacle at {:?} uses layer {}, layers go up to {}",
                bad.cell,
                bad.layer,
                LayerMask::LAYER_COUNT - 1
            )));
        }

        Ok(())
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Build the in-memory obstacle set for this level
    pub fn obstacle_map(&self) -> ObstacleMap {
        let mut map = ObstacleMap::new();
        for o in &self.obstacles {
            map.add_cell(o.cell[0], o.cell[1], self.movement.grid_size, o.layer);
        }
        map
    }

    /// Build a controller over any obstacle backend
    pub fn controller_with<Q: crate::obstacle::ObstacleQuery>(
        &self,
        query: Q,
    ) -> Result<TwinController<Q>> {
        TwinController::new(
            self.movement,
            self.characters.primary,
            self.characters.mirrored,
            query,
        )
    }

    /// Build a controller backed by [`LevelFile::obstacle_map`]
    pub fn into_controller(self) -> Result<TwinController<ObstacleMap>> {
        let map = self.obstacle_map();
        self.controller_with(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mirrorstep_core::Direction;

    const LEVEL: &str = r#"
[level]
name = "corridor"

[movement]
move_speed = 10.0

[characters]
primary = [0.0, 0.0, 0.0]
mirrored = [-3.0, 0.0, 0.0]

[[obstacles]]
cell = [1, 0]

[[obstacles]]
cell = [-4, 0]
layer = 2
"#;

    #[test]
    fn test_load_level_str() {
        let level = load_level_str(LEVEL).unwrap();
        assert_eq!(level.level.name, "corridor");
        assert_eq!(level.movement.move_speed, 10.0);
        // Unlisted tunables keep their defaults
        assert_eq!(level.movement.bump_distance, 0.2);
        assert_eq!(level.obstacles.len(), 2);
        assert_eq!(level.obstacles[0].layer, 0);
        assert_eq!(level.obstacles[1].layer, 2);
    }

    #[test]
    fn test_level_controller_drops_both_blocked() {
        let mut ctl = load_level_str(LEVEL).unwrap().into_controller().unwrap();
        assert_eq!(
            ctl.handle_direction(Direction::Right),
            crate::controller::InputOutcome::Dropped
        );
    }

    #[test]
    fn test_rejects_off_grid_start() {
        let content = LEVEL.replace("[-3.0, 0.0, 0.0]", "[-3.5, 0.0, 0.0]");
        let err = load_level_str(&content).unwrap_err();
        assert!(matches!(err, MirrorstepError::Level(_)));
    }

    #[test]
    fn test_rejects_bad_layer() {
        let content = LEVEL.replace("layer = 2", "layer = 40");
        assert!(load_level_str(&content).is_err());
    }

    #[test]
    fn test_missing_characters_is_parse_error() {
        let err = load_level_str("[level]\nname = \"x\"\n").unwrap_err();
        assert!(matches!(err, MirrorstepError::TomlParse(_)));
    }

    #[test]
    fn test_sample_reloads() {
        let text = LevelFile::sample("demo").to_toml_string().unwrap();
        let level = load_level_str(&text).unwrap();
        assert_eq!(level.level.name, "demo");
        assert_eq!(level.obstacles.len(), 2);
        assert_eq!(level.characters.primary, Vec3::planar(1.0, 0.0));
    }

    #[test]
    fn test_load_level_missing_file() {
        let err = load_level("definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, MirrorstepError::Io(_)));
    }
}
