//! The two mirrored characters

use mirrorstep_core::Vec3;

/// Which twin a character is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Moves in the input direction
    Primary,
    /// Moves with the horizontal component flipped
    Mirrored,
}

impl Role {
    pub const BOTH: [Role; 2] = [Role::Primary, Role::Mirrored];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Primary => "primary",
            Role::Mirrored => "mirrored",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Role::Primary => 0,
            Role::Mirrored => 1,
        }
    }
}

/// A character on the grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Character {
    pub role: Role,
    /// Grid-aligned while at rest, interpolated during a move cycle
    pub position: Vec3,
}

impl Character {
    pub fn new(role: Role, position: Vec3) -> Self {
        Self { role, position }
    }
}

/// Both twins, addressed by role
#[derive(Debug, Clone, PartialEq)]
pub struct TwinPair {
    slots: [Character; 2],
}

impl TwinPair {
    pub fn new(primary: Vec3, mirrored: Vec3) -> Self {
        Self {
            slots: [
                Character::new(Role::Primary, primary),
                Character::new(Role::Mirrored, mirrored),
            ],
        }
    }

    pub fn get(&self, role: Role) -> &Character {
        &self.slots[role.index()]
    }

    pub fn get_mut(&mut self, role: Role) -> &mut Character {
        &mut self.slots[role.index()]
    }

    pub fn position(&self, role: Role) -> Vec3 {
        self.get(role).position
    }

    /// Positions as `[primary, mirrored]`
    pub fn positions(&self) -> [Vec3; 2] {
        [self.slots[0].position, self.slots[1].position]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.slots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_addressing() {
        let mut pair = TwinPair::new(Vec3::planar(1.0, 0.0), Vec3::planar(-1.0, 0.0));
        assert_eq!(pair.get(Role::Primary).role, Role::Primary);
        assert_eq!(pair.position(Role::Mirrored), Vec3::planar(-1.0, 0.0));

        pair.get_mut(Role::Mirrored).position = Vec3::planar(-2.0, 0.0);
        assert_eq!(
            pair.positions(),
            [Vec3::planar(1.0, 0.0), Vec3::planar(-2.0, 0.0)]
        );
        assert_eq!(pair.iter().count(), 2);
    }
}
