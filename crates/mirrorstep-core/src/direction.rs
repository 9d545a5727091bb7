//! Cardinal input directions

use crate::error::MirrorstepError;
use crate::types::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four cardinal directions a move can take
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in input priority order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector on the movement plane
    pub fn to_vec3(self) -> Vec3 {
        match self {
            Direction::Up => Vec3::planar(0.0, 1.0),
            Direction::Down => Vec3::planar(0.0, -1.0),
            Direction::Left => Vec3::planar(-1.0, 0.0),
            Direction::Right => Vec3::planar(1.0, 0.0),
        }
    }

    /// The direction the mirrored twin takes: horizontal flipped, vertical kept
    pub fn mirrored(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            other => other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Negate the horizontal component of a direction vector
pub fn mirror_vector(v: Vec3) -> Vec3 {
    Vec3::new(-v.x, v.y, v.z)
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = MirrorstepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "u" => Ok(Direction::Up),
            "down" | "d" => Ok(Direction::Down),
            "left" | "l" => Ok(Direction::Left),
            "right" | "r" => Ok(Direction::Right),
            other => Err(MirrorstepError::Parse(format!(
                "unknown direction '{}', expected up/down/left/right",
                other
            ))),
        }
    }
}
