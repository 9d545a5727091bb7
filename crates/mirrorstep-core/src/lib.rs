//! Mirrorstep Core - Foundational types for twin-character grid movement
//!
//! This crate provides the types that all other Mirrorstep crates depend on:
//! - `Vec3` - Spatial vector with grid helpers
//! - `Direction` - The four cardinal input directions and their mirror
//! - `LayerMask` - Obstacle layer filter
//! - `MovementConfig` - Tunables for grid size, speed and bump feedback
//! - Error types and Result alias

pub mod easing;
mod config;
mod direction;
mod error;
mod layer;
mod types;

pub use config::MovementConfig;
pub use direction::{mirror_vector, Direction};
pub use error::{MirrorstepError, Result};
pub use layer::LayerMask;
pub use types::Vec3;
