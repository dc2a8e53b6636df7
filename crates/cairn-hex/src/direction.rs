//! The six axial directions of a pointy-top hex grid.

use crate::hex::Hex;

/// A compass direction on the hex grid.
///
/// Directions are ordered `E, NE, NW, W, SW, SE` and map to indices
/// 0–5, matching the conventional pointy-top neighbour table. One
/// rotation step is 60°; [`Direction::rotated`] walks the ring in
/// either sense.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Index 0, offset `(1, 0)`.
    East,
    /// Index 1, offset `(1, -1)`.
    NorthEast,
    /// Index 2, offset `(0, -1)`.
    NorthWest,
    /// Index 3, offset `(-1, 0)`.
    West,
    /// Index 4, offset `(-1, 1)`.
    SouthWest,
    /// Index 5, offset `(0, 1)`.
    SouthEast,
}

impl Direction {
    /// All six directions in index order.
    pub const ALL: [Direction; 6] = [
        Direction::East,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::West,
        Direction::SouthWest,
        Direction::SouthEast,
    ];

    /// The index of this direction in [`Direction::ALL`].
    pub fn index(self) -> usize {
        match self {
            Direction::East => 0,
            Direction::NorthEast => 1,
            Direction::NorthWest => 2,
            Direction::West => 3,
            Direction::SouthWest => 4,
            Direction::SouthEast => 5,
        }
    }

    /// Look up a direction by index, wrapping modulo 6.
    pub fn from_index(index: usize) -> Direction {
        Self::ALL[index % 6]
    }

    /// The unit offset for one step in this direction.
    pub fn offset(self) -> Hex {
        match self {
            Direction::East => Hex::new(1, 0),
            Direction::NorthEast => Hex::new(1, -1),
            Direction::NorthWest => Hex::new(0, -1),
            Direction::West => Hex::new(-1, 0),
            Direction::SouthWest => Hex::new(-1, 1),
            Direction::SouthEast => Hex::new(0, 1),
        }
    }

    /// Rotate by `steps` 60° increments; positive steps walk the index
    /// ring forward (E → NE → NW → …), negative steps walk it backward.
    pub fn rotated(self, steps: i32) -> Direction {
        let index = (self.index() as i32 + steps).rem_euclid(6) as usize;
        Self::ALL[index]
    }
}
