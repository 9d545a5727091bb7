//! Obstacle layer masks

use serde::{Deserialize, Serialize};

/// A 32-bit set of collision layers.
///
/// Obstacle queries only report obstacles whose layer is contained in the
/// mask. The default mask covers every layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const ALL: Self = Self(u32::MAX);
    pub const NONE: Self = Self(0);

    /// Number of addressable layers
    pub const LAYER_COUNT: u8 = 32;

    /// Build a mask from layer indices. Indices >= 32 are ignored.
    pub fn from_layers(layers: &[u8]) -> Self {
        let bits = layers
            .iter()
            .filter(|l| **l < Self::LAYER_COUNT)
            .fold(0u32, |acc, l| acc | (1 << l));
        Self(bits)
    }

    pub fn contains(&self, layer: u8) -> bool {
        layer < Self::LAYER_COUNT && self.0 & (1 << layer) != 0
    }

    pub fn bits(&self) -> u32 {
        self.0
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        Self::ALL
    }
}
