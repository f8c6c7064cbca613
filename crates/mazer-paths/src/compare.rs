//! Run every algorithm on the same maze.

use mazer_core::{Coord, Grid};

use crate::engine::{Algorithm, SearchError, SearchRun, run_algorithm};

/// Run all five algorithms against `grid`, in [`Algorithm::ALL`] order.
///
/// Each run works on its own copy of the grid with transient markings
/// cleared, so every algorithm sees the identical wall layout and none
/// sees another's markings. `grid` itself is left untouched.
pub fn compare_all(grid: &Grid, start: Coord, goal: Coord) -> Result<Vec<SearchRun>, SearchError> {
    Algorithm::ALL
        .iter()
        .map(|&algorithm| run_on_copy(grid, algorithm, start, goal))
        .collect()
}

/// Like [`compare_all`], with the five runs spread over the rayon thread
/// pool. Results come back in the same order.
///
/// Timings are measured per run and may be noisier than the sequential
/// version while runs compete for cores.
#[cfg(feature = "parallel")]
pub fn compare_all_parallel(
    grid: &Grid,
    start: Coord,
    goal: Coord,
) -> Result<Vec<SearchRun>, SearchError> {
    use rayon::prelude::*;

    Algorithm::ALL
        .par_iter()
        .map(|&algorithm| run_on_copy(grid, algorithm, start, goal))
        .collect()
}

fn run_on_copy(
    grid: &Grid,
    algorithm: Algorithm,
    start: Coord,
    goal: Coord,
) -> Result<SearchRun, SearchError> {
    let mut copy = grid.clone();
    run_algorithm(&mut copy, algorithm, start, goal)
}
