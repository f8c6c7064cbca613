//! **mazer-core**: grid model for maze generation and pathfinding.
//!
//! This crate provides the foundational types shared by the *mazer*
//! crates: coordinates and direction tables, the [`CellKind`] tag, the
//! [`Grid`] of cells, the [`Maze`] value, and the configuration errors
//! that are rejected before any generation or search begins.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod maze;

pub use cell::CellKind;
pub use error::{ConfigError, Endpoint, GridError, validate_endpoints};
pub use geom::{CARDINAL, Coord, OCTILE, chebyshev, manhattan};
pub use grid::Grid;
pub use maze::Maze;
