//! Rapier-backed obstacle queries for Mirrorstep
//!
//! [`PhysicsObstacles`] keeps static colliders in a Rapier collider set and
//! answers [`ObstacleQuery`](mirrorstep_motion::ObstacleQuery) probes with a
//! ball shape-intersection query, filtered by collision groups built from the
//! configured layer mask.

mod obstacles;

pub use obstacles::PhysicsObstacles;
