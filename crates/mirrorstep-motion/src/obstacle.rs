//! Obstacle queries

use mirrorstep_core::{LayerMask, Vec3};

/// Spatial query against level geometry.
///
/// Implementations answer whether any obstacle on a layer in `mask` overlaps
/// the disc of `radius` centered at `center` on the movement plane.
pub trait ObstacleQuery {
    fn overlaps_obstacle(&self, center: Vec3, radius: f32, mask: LayerMask) -> bool;
}

impl<T: ObstacleQuery + ?Sized> ObstacleQuery for &T {
    fn overlaps_obstacle(&self, center: Vec3, radius: f32, mask: LayerMask) -> bool {
        (**self).overlaps_obstacle(center, radius, mask)
    }
}

/// An axis-aligned box obstacle on the movement plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxObstacle {
    pub min: (f32, f32),
    pub max: (f32, f32),
    pub layer: u8,
}

impl BoxObstacle {
    /// Disc-vs-box test using the closest point on the box. Touching counts.
    fn overlaps_disc(&self, center: Vec3, radius: f32) -> bool {
        let cx = center.x.clamp(self.min.0, self.max.0);
        let cy = center.y.clamp(self.min.1, self.max.1);
        let dx = center.x - cx;
        let dy = center.y - cy;
        dx * dx + dy * dy <= radius * radius
    }
}

/// In-memory obstacle set for levels without a physics backend
#[derive(Debug, Clone, Default)]
pub struct ObstacleMap {
    obstacles: Vec<BoxObstacle>,
}

impl ObstacleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a box given its center and half extents
    pub fn add_box(&mut self, center: Vec3, half_extents: (f32, f32), layer: u8) {
        self.obstacles.push(BoxObstacle {
            min: (center.x - half_extents.0, center.y - half_extents.1),
            max: (center.x + half_extents.0, center.y + half_extents.1),
            layer,
        });
    }

    /// Fill the grid cell whose center sits at `(x, y) * grid_size`
    pub fn add_cell(&mut self, x: i32, y: i32, grid_size: f32, layer: u8) {
        let half = grid_size * 0.5;
        let center = Vec3::planar(x as f32 * grid_size, y as f32 * grid_size);
        self.add_box(center, (half, half), layer);
    }

    /// Remove every obstacle whose box contains `point`. Returns how many went.
    pub fn remove_at(&mut self, point: Vec3) -> usize {
        let before = self.obstacles.len();
        self.obstacles.retain(|o| !o.overlaps_disc(point, 0.0));
        before - self.obstacles.len()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BoxObstacle> {
        self.obstacles.iter()
    }
}

impl ObstacleQuery for ObstacleMap {
    fn overlaps_obstacle(&self, center: Vec3, radius: f32, mask: LayerMask) -> bool {
        self.obstacles
            .iter()
            .any(|o| mask.contains(o.layer) && o.overlaps_disc(center, radius))
    }
}
