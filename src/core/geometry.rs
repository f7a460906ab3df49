//! Board geometry: coordinates and compass directions.
//!
//! ## Coordinate
//!
//! A 0-indexed (row, column) pair. Row 0 is the north edge of the
//! board. Components are signed so the beam engine can represent the
//! boundary coordinate one step past the grid.
//!
//! ## Direction
//!
//! The four compass directions, with rotation and stepping helpers.
//! The beam, piece facings, and move destinations all use them.

use serde::{Deserialize, Serialize};

/// A compass direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions in (N, E, S, W) order - the side-indexing order
    /// used by [`crate::core::OrientationState`].
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Position of this direction in the fixed (N, E, S, W) order.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    /// The direction 90 degrees clockwise.
    #[must_use]
    pub const fn clockwise(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// The direction 90 degrees counterclockwise.
    #[must_use]
    pub const fn counterclockwise(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    /// The opposite direction.
    ///
    /// A beam traveling in direction `d` strikes a piece on the side
    /// `d.opposite()`.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Rotate by a quarter turn in the given sense.
    #[must_use]
    pub const fn rotated(self, clockwise: bool) -> Self {
        if clockwise {
            self.clockwise()
        } else {
            self.counterclockwise()
        }
    }

    /// The (row, column) step for one cell of travel in this direction.
    #[must_use]
    pub const fn offset(self) -> (i16, i16) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::North => "North",
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
        };
        write!(f, "{}", name)
    }
}

/// A board coordinate: 0-indexed (row, column), row 0 at the north edge.
///
/// Ordering is row-major so sorted coordinate lists are deterministic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: i16,
    pub col: i16,
}

impl Coordinate {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: i16, col: i16) -> Self {
        Self { row, col }
    }

    /// The coordinate one cell away in the given direction.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.offset();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
