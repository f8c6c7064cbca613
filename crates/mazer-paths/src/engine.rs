//! The public search entry points: [`Algorithm`], [`SearchResult`] and
//! [`run_algorithm`].

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use mazer_core::{CellKind, ConfigError, Coord, Grid, validate_endpoints};

use crate::observer::{NoopObserver, SearchObserver};
use crate::path::{RouteError, reconstruct};
use crate::state::SearchState;

// ---------------------------------------------------------------------------
// Algorithm
// ---------------------------------------------------------------------------

/// One of the five interchangeable search strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
    Jps,
}

impl Algorithm {
    /// Every algorithm, in comparison order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::AStar,
        Algorithm::Jps,
    ];

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::Dijkstra => "Dijkstra",
            Self::AStar => "A*",
            Self::Jps => "JumpPoint",
        }
    }

    /// Whether the algorithm moves diagonally as well as cardinally.
    pub const fn is_octile(self) -> bool {
        matches!(self, Self::Jps)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The string did not name a known algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm \u{201c}{}\u{201d}", self.0)
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "dijkstra" => Ok(Self::Dijkstra),
            "a*" | "astar" => Ok(Self::AStar),
            "jps" | "jumppoint" => Ok(Self::Jps),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Metrics for a single algorithm run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub found: bool,
    /// Cells finalized (dequeued, popped or entered) during the run.
    pub nodes_explored: usize,
    /// Route cells between the endpoints; 0 when nothing was found.
    pub path_length: usize,
    /// Time spent searching, excluding route reconstruction.
    pub elapsed: Duration,
}

impl SearchResult {
    /// `path_length × nodes_explored`, the comparison metric reported next
    /// to the raw counts.
    #[inline]
    pub fn operations(&self) -> usize {
        self.path_length * self.nodes_explored
    }
}

/// A finished run: which algorithm, its metrics and its route.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchRun {
    pub algorithm: Algorithm,
    pub result: SearchResult,
    /// Route cells from start to goal, excluding tagged endpoints.
    pub path: Vec<Coord>,
    /// Parent chain from start to goal (jump points for JPS).
    pub waypoints: Vec<Coord>,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that prevent a run from producing a result.
///
/// Not finding the goal is not an error; it is reported as
/// `SearchResult { found: false, .. }`.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// Start/goal rejected before the search began.
    Config(ConfigError),
    /// The finished search left inconsistent parent links.
    Route(RouteError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
            Self::Route(e) => write!(f, "route reconstruction failed: {e}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Route(e) => Some(e),
        }
    }
}

impl From<ConfigError> for SearchError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<RouteError> for SearchError {
    fn from(e: RouteError) -> Self {
        Self::Route(e)
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Run `algorithm` on `grid` from `start` to `goal`.
///
/// See [`run_algorithm_with`].
pub fn run_algorithm(
    grid: &mut Grid,
    algorithm: Algorithm,
    start: Coord,
    goal: Coord,
) -> Result<SearchRun, SearchError> {
    run_algorithm_with(grid, algorithm, start, goal, &mut NoopObserver)
}

/// Run `algorithm` on `grid` from `start` to `goal`, reporting markings to
/// `observer` as they happen.
///
/// The grid's transient markings are cleared first. Afterwards every
/// discovered cell is marked [`CellKind::Visited`] and the route cells
/// [`CellKind::FinalPath`]; tagged endpoints are never overwritten.
pub fn run_algorithm_with(
    grid: &mut Grid,
    algorithm: Algorithm,
    start: Coord,
    goal: Coord,
    observer: &mut dyn SearchObserver,
) -> Result<SearchRun, SearchError> {
    validate_endpoints(grid.rows(), grid.cols(), start, goal)?;
    grid.clear_transient();

    let mut state = SearchState::new(grid);
    let started = Instant::now();
    let found = state.run(algorithm, grid, start, goal, observer);
    let elapsed = started.elapsed();

    for p in state.discovered() {
        if !grid.at(p).is_some_and(CellKind::is_endpoint) {
            grid.set(p, CellKind::Visited);
        }
    }

    let route = if found {
        let route = reconstruct(&state, grid, start, goal)?;
        for &p in &route.cells {
            grid.set(p, CellKind::FinalPath);
            observer.on_mark(p, CellKind::FinalPath);
        }
        route
    } else {
        Default::default()
    };

    let result = SearchResult {
        found,
        nodes_explored: state.nodes_explored(),
        path_length: route.len(),
        elapsed,
    };
    log::trace!(
        "{algorithm}: found={} length={} explored={} in {:?}",
        result.found,
        result.path_length,
        result.nodes_explored,
        result.elapsed
    );

    Ok(SearchRun {
        algorithm,
        result,
        path: route.cells,
        waypoints: route.waypoints,
    })
}
