//! Input resolution: one direction in, one move command (or nothing) out

use crate::character::{Role, TwinPair};
use crate::obstacle::ObstacleQuery;
use mirrorstep_core::{mirror_vector, Direction, MovementConfig, Vec3};

/// A resolved move for both twins.
///
/// Created once per accepted input and consumed by exactly one move cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveCommand {
    /// The input direction (the primary twin's direction)
    pub direction: Direction,
    pub primary_dir: Vec3,
    /// Always `primary_dir` with the horizontal component negated
    pub mirrored_dir: Vec3,
    pub primary_can_move: bool,
    pub mirrored_can_move: bool,
}

impl MoveCommand {
    pub fn any_can_move(&self) -> bool {
        self.primary_can_move || self.mirrored_can_move
    }

    pub fn can_move(&self, role: Role) -> bool {
        match role {
            Role::Primary => self.primary_can_move,
            Role::Mirrored => self.mirrored_can_move,
        }
    }

    pub fn direction_for(&self, role: Role) -> Vec3 {
        match role {
            Role::Primary => self.primary_dir,
            Role::Mirrored => self.mirrored_dir,
        }
    }
}

/// The cell a twin at `position` would land on moving along `dir`
pub fn candidate_cell(config: &MovementConfig, position: Vec3, dir: Vec3) -> Vec3 {
    position + dir * config.grid_size
}

/// Whether the candidate cell is free of obstacles.
///
/// Probes a disc of `collision_radius` at the candidate cell against the
/// configured obstacle layers.
pub fn can_move<Q: ObstacleQuery + ?Sized>(
    query: &Q,
    config: &MovementConfig,
    position: Vec3,
    dir: Vec3,
) -> bool {
    let target = candidate_cell(config, position, dir);
    !query.overlaps_obstacle(target, config.collision_radius, config.obstacle_layers)
}

/// Resolve an input direction against both twins.
///
/// Returns `None` when both twins are blocked: the input is dropped without
/// any bump feedback.
pub fn resolve<Q: ObstacleQuery + ?Sized>(
    query: &Q,
    config: &MovementConfig,
    twins: &TwinPair,
    direction: Direction,
) -> Option<MoveCommand> {
    let primary_dir = direction.to_vec3();
    let mirrored_dir = mirror_vector(primary_dir);

    let primary_can_move = can_move(query, config, twins.position(Role::Primary), primary_dir);
    let mirrored_can_move =
        can_move(query, config, twins.position(Role::Mirrored), mirrored_dir);

    log::debug!(
        "resolve {}: primary {} mirrored {}",
        direction,
        if primary_can_move { "free" } else { "blocked" },
        if mirrored_can_move { "free" } else { "blocked" },
    );

    let command = MoveCommand {
        direction,
        primary_dir,
        mirrored_dir,
        primary_can_move,
        mirrored_can_move,
    };

    command.any_can_move().then_some(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obstacle::ObstacleMap;

    fn pair() -> TwinPair {
        TwinPair::new(Vec3::planar(0.0, 0.0), Vec3::planar(-3.0, 0.0))
    }

    #[test]
    fn test_mirrored_direction_for_every_input() {
        let map = ObstacleMap::new();
        let config = MovementConfig::default();
        for dir in Direction::ALL {
            let cmd = resolve(&map, &config, &pair(), dir).unwrap();
            assert_eq!(cmd.mirrored_dir.x, -cmd.primary_dir.x);
            assert_eq!(cmd.mirrored_dir.y, cmd.primary_dir.y);
            assert!(cmd.primary_can_move && cmd.mirrored_can_move);
        }
    }

    #[test]
    fn test_can_move_uses_grid_size() {
        let mut map = ObstacleMap::new();
        map.add_cell(1, 0, 2.0, 0);
        let config = MovementConfig {
            grid_size: 2.0,
            bump_distance: 0.4,
            ..MovementConfig::default()
        };
        assert!(!can_move(&map, &config, Vec3::ZERO, Vec3::RIGHT));
        assert!(can_move(&map, &config, Vec3::ZERO, Vec3::UP));
        assert_eq!(
            candidate_cell(&config, Vec3::ZERO, Vec3::RIGHT),
            Vec3::planar(2.0, 0.0)
        );
    }

    #[test]
    fn test_one_blocked() {
        let mut map = ObstacleMap::new();
        map.add_cell(1, 0, 1.0, 0);
        let config = MovementConfig::default();

        let cmd = resolve(&map, &config, &pair(), Direction::Right).unwrap();
        assert!(!cmd.primary_can_move);
        // Mirrored twin heads left to (-4, 0), which is free
        assert!(cmd.mirrored_can_move);
        assert_eq!(cmd.direction_for(Role::Mirrored), Vec3::planar(-1.0, 0.0));
    }

    #[test]
    fn test_both_blocked_drops_input() {
        let mut map = ObstacleMap::new();
        map.add_cell(1, 0, 1.0, 0);
        map.add_cell(-4, 0, 1.0, 0);
        let config = MovementConfig::default();

        assert!(resolve(&map, &config, &pair(), Direction::Right).is_none());
        // Other directions are still open
        assert!(resolve(&map, &config, &pair(), Direction::Up).is_some());
    }

    #[test]
    fn test_layer_mask_excludes_obstacles() {
        let mut map = ObstacleMap::new();
        map.add_cell(1, 0, 1.0, 5);
        map.add_cell(-4, 0, 1.0, 5);
        let config = MovementConfig {
            obstacle_layers: mirrorstep_core::LayerMask::from_layers(&[0]),
            ..MovementConfig::default()
        };
        let cmd = resolve(&map, &config, &pair(), Direction::Right).unwrap();
        assert!(cmd.primary_can_move && cmd.mirrored_can_move);
    }
}
