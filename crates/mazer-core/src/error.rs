//! Error types for grid construction and run configuration.

use std::fmt;

use crate::geom::Coord;

/// Which endpoint a configuration error refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// A maze or search was configured with parameters that can never work.
///
/// These are rejected before generation or search begins.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The grid has no cells.
    EmptyGrid { rows: i32, cols: i32 },
    /// An endpoint lies outside `[0, rows) × [0, cols)`.
    OutOfBounds {
        endpoint: Endpoint,
        pos: Coord,
        rows: i32,
        cols: i32,
    },
    /// Start and goal are the same cell.
    SameEndpoints(Coord),
    /// The wall-opening probability is not within `[0, 1]`.
    InvalidNoise(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { rows, cols } => write!(f, "grid of {rows}x{cols} has no cells"),
            Self::OutOfBounds {
                endpoint,
                pos,
                rows,
                cols,
            } => write!(f, "{endpoint} {pos} is outside the {rows}x{cols} grid"),
            Self::SameEndpoints(pos) => write!(f, "start and goal are both {pos}"),
            Self::InvalidNoise(p) => write!(f, "noise probability {p} is not within [0, 1]"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors that can occur when parsing an ASCII grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The input contains no rows.
    Empty,
    /// Rows have inconsistent widths.
    InconsistentSize { row: i32, expected: i32, found: i32 },
    /// A character outside the glyph set was found.
    InvalidGlyph { ch: char, pos: Coord },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("grid: no rows"),
            Self::InconsistentSize {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} columns, expected {expected}"
            ),
            Self::InvalidGlyph { ch, pos } => {
                write!(f, "grid contains invalid glyph \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Check that `start` and `goal` are distinct and inside a `rows × cols`
/// grid.
pub fn validate_endpoints(
    rows: i32,
    cols: i32,
    start: Coord,
    goal: Coord,
) -> Result<(), ConfigError> {
    if rows <= 0 || cols <= 0 {
        return Err(ConfigError::EmptyGrid { rows, cols });
    }
    for (endpoint, pos) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
        if pos.row < 0 || pos.col < 0 || pos.row >= rows || pos.col >= cols {
            return Err(ConfigError::OutOfBounds {
                endpoint,
                pos,
                rows,
                cols,
            });
        }
    }
    if start == goal {
        return Err(ConfigError::SameEndpoints(start));
    }
    Ok(())
}
