//! Route reconstruction from parent links.

use std::fmt;

use mazer_core::{CellKind, Coord, Grid};

use crate::state::SearchState;

/// An ordered route from start to goal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    /// The parent chain from start to goal, both included. For jump point
    /// search these are the jump points; for the other algorithms every
    /// consecutive pair is adjacent.
    pub waypoints: Vec<Coord>,
    /// Every cell stepped through, in order, excluding cells tagged
    /// [`CellKind::Start`] or [`CellKind::Goal`].
    pub cells: Vec<Coord>,
}

impl Route {
    /// Number of route cells, not counting tagged endpoints.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// The parent links of a finished search are inconsistent.
///
/// Parent links are assigned at most once per cell before it is finalized,
/// so these indicate a defect rather than a normal outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// Following parents from the goal never reached the start.
    Cycle { at: Coord },
    /// A cell on the chain has no parent, or is a root other than start.
    Broken { at: Coord },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cycle { at } => write!(f, "parent links cycle through {at}"),
            Self::Broken { at } => write!(f, "parent chain broken at {at}"),
        }
    }
}

impl std::error::Error for RouteError {}

/// Walk parent links from `goal` back to `start` and return the route in
/// start-to-goal order.
///
/// Straight multi-cell hops between waypoints are expanded one step at a
/// time, so `cells` is always a sequence of 8-connected neighbours.
pub fn reconstruct(
    state: &SearchState,
    grid: &Grid,
    start: Coord,
    goal: Coord,
) -> Result<Route, RouteError> {
    let limit = grid.len();
    let mut waypoints = vec![goal];
    let mut cur = goal;
    while cur != start {
        if waypoints.len() > limit {
            return Err(RouteError::Cycle { at: cur });
        }
        let prev = state
            .parent_of(cur)
            .ok_or(RouteError::Broken { at: cur })?;
        if prev == cur {
            return Err(RouteError::Broken { at: cur });
        }
        waypoints.push(prev);
        cur = prev;
    }
    waypoints.reverse();

    let mut cells = Vec::new();
    for hop in waypoints.windows(2) {
        let (mut c, to) = (hop[0], hop[1]);
        while c != to {
            c = c + (to - c).signum();
            if !grid.at(c).is_some_and(CellKind::is_endpoint) {
                cells.push(c);
            }
        }
    }

    Ok(Route { waypoints, cells })
}
