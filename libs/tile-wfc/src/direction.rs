//! Grid directions.
//!
//! Rows grow toward the south and columns toward the east. In world space
//! north is +Y and east is +X.

use serde::{Deserialize, Serialize};
use tile_mesh::primitives::Slope;

/// One of the four grid neighbours of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions in edge order (north, east, south, west).
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Position of this direction in an edge array.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    /// The direction pointing back.
    #[inline]
    pub fn opposite(self) -> Direction {
        Direction::ALL[(self.index() + 2) % 4]
    }

    /// The direction after `turns` counter-clockwise quarter turns about +Z.
    ///
    /// ```rust
    /// use tile_wfc::Direction;
    ///
    /// assert_eq!(Direction::North.rotated(1), Direction::West);
    /// assert_eq!(Direction::East.rotated(2), Direction::West);
    /// ```
    pub fn rotated(self, turns: u8) -> Direction {
        Direction::ALL[(self.index() + 3 * turns as usize) % 4]
    }

    /// The neighbouring cell in this direction, if it is inside `shape`.
    pub fn step(self, (row, col): (usize, usize), (rows, cols): (usize, usize)) -> Option<(usize, usize)> {
        let (row, col) = match self {
            Direction::North => (row.checked_sub(1)?, col),
            Direction::East => (row, col + 1),
            Direction::South => (row + 1, col),
            Direction::West => (row, col.checked_sub(1)?),
        };
        (row < rows && col < cols).then_some((row, col))
    }

    /// The world-space slope of a ramp rising in this direction.
    pub fn slope(self) -> Slope {
        match self {
            Direction::North => Slope::PosY,
            Direction::East => Slope::PosX,
            Direction::South => Slope::NegY,
            Direction::West => Slope::NegX,
        }
    }
}
