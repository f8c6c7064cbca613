//! Geometry primitives: [`Coord`] and the direction tables.
//!
//! Coordinates are `(row, col)` pairs. Rows grow downwards and columns grow
//! to the right, so the derived ordering is row-major.

use std::fmt;
use std::ops::{Add, Mul, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A grid coordinate. Ordering is row-major (row first, then column).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (dr, dc).
    #[inline]
    pub const fn shift(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Component-wise sign, turning an offset into a unit step.
    #[inline]
    pub const fn signum(self) -> Self {
        Self {
            row: self.row.signum(),
            col: self.col.signum(),
        }
    }

    /// Whether both components are non-zero.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self.row != 0 && self.col != 0
    }

    /// The four cardinal neighbours in [`CARDINAL`] order.
    #[inline]
    pub fn neighbors_4(self) -> [Coord; 4] {
        CARDINAL.map(|d| self + d)
    }

    /// All eight neighbours in [`OCTILE`] order.
    #[inline]
    pub fn neighbors_8(self) -> [Coord; 8] {
        OCTILE.map(|d| self + d)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl Mul<i32> for Coord {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.row * rhs, self.col * rhs)
    }
}

// ---------------------------------------------------------------------------
// Directions
// ---------------------------------------------------------------------------

pub const NORTH: Coord = Coord::new(-1, 0);
pub const SOUTH: Coord = Coord::new(1, 0);
pub const WEST: Coord = Coord::new(0, -1);
pub const EAST: Coord = Coord::new(0, 1);
pub const NORTH_EAST: Coord = Coord::new(-1, 1);
pub const SOUTH_EAST: Coord = Coord::new(1, 1);
pub const SOUTH_WEST: Coord = Coord::new(1, -1);
pub const NORTH_WEST: Coord = Coord::new(-1, -1);

/// Cardinal directions: up, down, left, right.
///
/// Carving, BFS, DFS, Dijkstra and A* all iterate in this order.
pub const CARDINAL: [Coord; 4] = [NORTH, SOUTH, WEST, EAST];

/// All eight directions, clockwise from north. Jump point search iterates
/// in this order.
pub const OCTILE: [Coord; 8] = [
    NORTH, NORTH_EAST, EAST, SOUTH_EAST, SOUTH, SOUTH_WEST, WEST, NORTH_WEST,
];

// ---------------------------------------------------------------------------
// Distances
// ---------------------------------------------------------------------------

/// Manhattan (L1) distance between two coordinates.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Chebyshev (L∞) distance between two coordinates.
#[inline]
pub fn chebyshev(a: Coord, b: Coord) -> i32 {
    (a.row - b.row).abs().max((a.col - b.col).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_row_major() {
        let mut v = vec![
            Coord::new(1, 0),
            Coord::new(0, 5),
            Coord::new(0, 1),
            Coord::new(1, -1),
        ];
        v.sort();
        assert_eq!(
            v,
            vec![
                Coord::new(0, 1),
                Coord::new(0, 5),
                Coord::new(1, -1),
                Coord::new(1, 0),
            ]
        );
    }

    #[test]
    fn arithmetic() {
        let a = Coord::new(2, 3);
        assert_eq!(a + EAST, Coord::new(2, 4));
        assert_eq!(a - Coord::new(1, 1), Coord::new(1, 2));
        assert_eq!(NORTH * 2, Coord::new(-2, 0));
        assert_eq!(Coord::new(-7, 4).signum(), Coord::new(-1, 1));
    }

    #[test]
    fn direction_tables() {
        assert_eq!(
            Coord::ZERO.neighbors_4(),
            [
                Coord::new(-1, 0),
                Coord::new(1, 0),
                Coord::new(0, -1),
                Coord::new(0, 1)
            ]
        );
        assert_eq!(OCTILE.iter().filter(|d| d.is_diagonal()).count(), 4);
        assert_eq!(Coord::new(5, 5).neighbors_8()[1], Coord::new(4, 6));
    }

    #[test]
    fn distances() {
        let a = Coord::new(0, 0);
        let b = Coord::new(3, -4);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(chebyshev(a, b), 4);
    }

    #[test]
    fn display() {
        assert_eq!(Coord::new(4, 9).to_string(), "(4, 9)");
    }
}
