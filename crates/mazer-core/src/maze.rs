//! The [`Maze`] value: a grid together with its endpoints.

use crate::cell::CellKind;
use crate::error::{ConfigError, validate_endpoints};
use crate::geom::Coord;
use crate::grid::Grid;

/// A generated maze. Start and goal are always in bounds and distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maze {
    pub grid: Grid,
    pub start: Coord,
    pub goal: Coord,
    /// Seed the maze was generated from, if any.
    pub seed: Option<u64>,
}

impl Maze {
    /// Wrap an existing grid, stamping the endpoint tags onto it.
    pub fn new(mut grid: Grid, start: Coord, goal: Coord) -> Result<Self, ConfigError> {
        validate_endpoints(grid.rows(), grid.cols(), start, goal)?;
        grid.set(start, CellKind::Start);
        grid.set(goal, CellKind::Goal);
        Ok(Self {
            grid,
            start,
            goal,
            seed: None,
        })
    }

    /// Build a maze from an ASCII grid containing exactly one `S` and one `E`.
    ///
    /// Returns `None` if either tag is missing.
    pub fn from_grid(grid: Grid) -> Option<Self> {
        let start = grid.find(CellKind::Start)?;
        let goal = grid.find(CellKind::Goal)?;
        Some(Self {
            grid,
            start,
            goal,
            seed: None,
        })
    }

    /// Clear transient markings and re-stamp the endpoint tags.
    pub fn reset(&mut self) {
        self.grid.clear_transient();
        self.grid.set(self.start, CellKind::Start);
        self.grid.set(self.goal, CellKind::Goal);
    }
}
