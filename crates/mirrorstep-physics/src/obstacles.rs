//! Static obstacle world wrapping Rapier 3D

use mirrorstep_core::{LayerMask, Vec3};
use mirrorstep_motion::level::LevelFile;
use mirrorstep_motion::ObstacleQuery;
use rapier3d::prelude::*;

/// Half depth of obstacle colliders along z. Probes run on the z = 0 plane,
/// so any positive depth makes the query behave like a 2D overlap test.
const OBSTACLE_HALF_DEPTH: f32 = 0.5;

/// Static level geometry queried through Rapier's query pipeline
pub struct PhysicsObstacles {
    pub rigid_body_set: RigidBodySet,
    pub collider_set: ColliderSet,
    pub query_pipeline: QueryPipeline,
}

impl PhysicsObstacles {
    pub fn new() -> Self {
        Self {
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            query_pipeline: QueryPipeline::new(),
        }
    }

    /// Build colliders for every obstacle cell in a level
    pub fn from_level(level: &LevelFile) -> Self {
        let mut world = Self::new();
        for o in &level.obstacles {
            world.add_cell(o.cell[0], o.cell[1], level.movement.grid_size, o.layer);
        }
        log::debug!("built {} obstacle colliders", world.collider_set.len());
        world
    }

    /// Insert a static box obstacle
    pub fn add_static_box(
        &mut self,
        center: Vec3,
        half_extents: (f32, f32),
        layer: u8,
    ) -> ColliderHandle {
        let collider =
            ColliderBuilder::cuboid(half_extents.0, half_extents.1, OBSTACLE_HALF_DEPTH)
                .translation(vector![center.x, center.y, 0.0])
                .collision_groups(layer_groups(layer))
                .build();
        self.insert(collider)
    }

    /// Fill the grid cell whose center sits at `(x, y) * grid_size`
    pub fn add_cell(&mut self, x: i32, y: i32, grid_size: f32, layer: u8) -> ColliderHandle {
        let half = grid_size * 0.5;
        let center = Vec3::planar(x as f32 * grid_size, y as f32 * grid_size);
        self.add_static_box(center, (half, half), layer)
    }

    /// Number of obstacle colliders
    pub fn len(&self) -> usize {
        self.collider_set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collider_set.is_empty()
    }

    /// Rebuild the query acceleration structure after collider changes
    pub fn update(&mut self) {
        self.query_pipeline.update(&self.collider_set);
    }

    fn insert(&mut self, collider: Collider) -> ColliderHandle {
        let handle = self.collider_set.insert(collider);
        self.update();
        handle
    }
}

impl Default for PhysicsObstacles {
    fn default() -> Self {
        Self::new()
    }
}

impl ObstacleQuery for PhysicsObstacles {
    fn overlaps_obstacle(&self, center: Vec3, radius: f32, mask: LayerMask) -> bool {
        let shape = Ball::new(radius);
        let shape_pos = Isometry::translation(center.x, center.y, 0.0);
        let filter = QueryFilter::default().groups(InteractionGroups::new(
            Group::ALL,
            Group::from_bits_truncate(mask.bits()),
        ));

        self.query_pipeline
            .intersection_with_shape(
                &self.rigid_body_set,
                &self.collider_set,
                &shape_pos,
                &shape,
                filter,
            )
            .is_some()
    }
}

/// Obstacles are members of their own layer and accept every probe
fn layer_groups(layer: u8) -> InteractionGroups {
    let bit = 1u32.checked_shl(layer as u32).unwrap_or(0);
    InteractionGroups::new(Group::from_bits_truncate(bit), Group::ALL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mirrorstep_core::{Direction, MovementConfig};
    use mirrorstep_motion::{InputOutcome, TwinController};

    #[test]
    fn test_create_obstacle_world() {
        let world = PhysicsObstacles::new();
        assert!(world.is_empty());
        assert!(!world.overlaps_obstacle(Vec3::ZERO, 0.4, LayerMask::ALL));
    }

    #[test]
    fn test_cell_probe() {
        let mut world = PhysicsObstacles::new();
        world.add_cell(1, 0, 1.0, 0);
        assert_eq!(world.len(), 1);

        assert!(world.overlaps_obstacle(Vec3::planar(1.0, 0.0), 0.4, LayerMask::ALL));
        assert!(!world.overlaps_obstacle(Vec3::planar(0.0, 1.0), 0.4, LayerMask::ALL));
        assert!(!world.overlaps_obstacle(Vec3::planar(-1.0, 0.0), 0.4, LayerMask::ALL));
    }

    #[test]
    fn test_layer_mask_filters_colliders() {
        let mut world = PhysicsObstacles::new();
        world.add_cell(0, 0, 1.0, 4);

        assert!(world.overlaps_obstacle(Vec3::ZERO, 0.4, LayerMask::from_layers(&[4])));
        assert!(!world.overlaps_obstacle(Vec3::ZERO, 0.4, LayerMask::from_layers(&[0])));
    }

    #[test]
    fn test_drives_twin_controller() {
        let mut world = PhysicsObstacles::new();
        world.add_cell(1, 0, 1.0, 0);
        let mut ctl = TwinController::new(
            MovementConfig::default(),
            Vec3::ZERO,
            Vec3::ZERO,
            world,
        )
        .unwrap();

        match ctl.handle_direction(Direction::Right) {
            InputOutcome::Started(cmd) => {
                assert!(!cmd.primary_can_move);
                assert!(cmd.mirrored_can_move);
            }
            other => panic!("expected a cycle, got {other:?}"),
        }
        let done = ctl.advance(0.2).unwrap();
        assert_eq!(done, [Vec3::ZERO, Vec3::planar(-1.0, 0.0)]);
    }
}
