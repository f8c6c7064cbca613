//! Search algorithms for maze grids.
//!
//! This crate runs five interchangeable searches from a start cell to a goal
//! cell on a [`mazer_core::Grid`]:
//!
//! - **BFS**, shortest route in steps over cardinal moves
//! - **DFS**, the first route found by a depth-first walk
//! - **Dijkstra**, uniform-cost search over cardinal moves
//! - **A\***, Dijkstra guided by Manhattan distance
//! - **Jump Point Search**, A* over 8-connected jumps with Chebyshev distance
//!
//! Each run goes through [`run_algorithm`], which allocates a fresh
//! [`SearchState`], times the search, reconstructs the [`Route`] and marks
//! the grid. [`compare_all`] runs every algorithm on private copies of the
//! same grid.
//!
//! # Seams
//!
//! | Item | Role |
//! |---|---|
//! | [`SearchObserver`] | receives every `Visited`/`FinalPath` marking as it happens |
//! | [`Components`] | connectivity queries without running a search |

mod astar;
mod bfs;
mod cc;
mod compare;
mod dfs;
mod dijkstra;
mod engine;
mod jps;
mod observer;
mod path;
mod state;

pub use cc::Components;
#[cfg(feature = "parallel")]
pub use compare::compare_all_parallel;
pub use compare::compare_all;
pub use engine::{
    Algorithm, SearchError, SearchResult, SearchRun, UnknownAlgorithm, run_algorithm,
    run_algorithm_with,
};
pub use observer::{NoopObserver, SearchObserver};
pub use path::{Route, RouteError, reconstruct};
pub use state::{SearchState, UNREACHABLE};
