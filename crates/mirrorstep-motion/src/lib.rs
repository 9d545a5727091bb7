//! Twin movement for Mirrorstep
//!
//! Two characters share one directional input. The primary twin moves the way
//! the input points; the mirrored twin moves with the horizontal component
//! flipped. Each twin is checked against the level's obstacles on its own:
//! a free twin slides one grid cell, a blocked twin bumps forward and back,
//! and if both are blocked the input is discarded.
//!
//! - [`resolver`] turns a direction into a [`MoveCommand`]
//! - [`animator`] plays one move cycle as a state machine driven by `advance(dt)`
//! - [`TwinController`] gates input while a cycle runs and owns both twins
//! - [`level`] loads twin start cells and obstacles from TOML

pub mod animator;
pub mod character;
pub mod controller;
pub mod level;
pub mod obstacle;
pub mod resolver;

pub use animator::{AnimatorState, MovementAnimator};
pub use character::{Character, Role, TwinPair};
pub use controller::{InputOutcome, TwinController};
pub use level::{load_level, load_level_str, LevelFile};
pub use obstacle::{ObstacleMap, ObstacleQuery};
pub use resolver::MoveCommand;
