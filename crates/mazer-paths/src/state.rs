use mazer_core::{CellKind, Coord, Grid};

use crate::engine::Algorithm;
use crate::observer::SearchObserver;

/// Sentinel cost meaning "not reached yet".
pub const UNREACHABLE: i32 = i32::MAX;

pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Priority-queue entry
// ---------------------------------------------------------------------------

/// Reference into the node arrays, ordered for use in `BinaryHeap`.
///
/// Smaller `f` pops first; ties go to the smaller row-major index.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (f, idx) first.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// SearchState
// ---------------------------------------------------------------------------

/// Per-run search bookkeeping over a grid's cells.
///
/// Holds the visited set, the parent links used for route reconstruction
/// and the cost map (distance for BFS/Dijkstra, g-score for A*/JPS), all as
/// flat arrays indexed like the grid. The start cell is its own parent.
///
/// A fresh state is allocated for every run and never shared between runs.
#[derive(Debug, Clone)]
pub struct SearchState {
    rows: i32,
    cols: i32,
    pub(crate) cost: Vec<i32>,
    pub(crate) parent: Vec<usize>,
    pub(crate) visited: Vec<bool>,
    pub(crate) discovered: Vec<usize>,
    pub(crate) explored: usize,
}

impl SearchState {
    /// Allocate an empty state sized for `grid`.
    pub fn new(grid: &Grid) -> Self {
        let len = grid.len();
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            cost: vec![UNREACHABLE; len],
            parent: vec![NO_PARENT; len],
            visited: vec![false; len],
            discovered: Vec::new(),
            explored: 0,
        }
    }

    /// Run `algorithm` from `start` to `goal`, filling this state.
    ///
    /// Returns whether the goal was reached. Both endpoints must be inside
    /// the grid; an out-of-bounds endpoint makes the run report `false`.
    pub fn run(
        &mut self,
        algorithm: Algorithm,
        grid: &Grid,
        start: Coord,
        goal: Coord,
        observer: &mut dyn SearchObserver,
    ) -> bool {
        match algorithm {
            Algorithm::Bfs => self.bfs(grid, start, goal, observer),
            Algorithm::Dfs => self.dfs(grid, start, goal, observer),
            Algorithm::Dijkstra => self.dijkstra(grid, start, goal, observer),
            Algorithm::AStar => self.astar(grid, start, goal, observer),
            Algorithm::Jps => self.jps(grid, start, goal, observer),
        }
    }

    /// Number of cells finalized so far.
    #[inline]
    pub fn nodes_explored(&self) -> usize {
        self.explored
    }

    /// Parent link of `p`, or `None` if `p` was never reached.
    pub fn parent_of(&self, p: Coord) -> Option<Coord> {
        let i = self.idx(p)?;
        match self.parent[i] {
            NO_PARENT => None,
            pi => Some(self.point(pi)),
        }
    }

    /// Best known cost of `p`, or `None` if `p` was never reached.
    pub fn cost_at(&self, p: Coord) -> Option<i32> {
        let i = self.idx(p)?;
        match self.cost[i] {
            UNREACHABLE => None,
            c => Some(c),
        }
    }

    /// Whether `p` has been marked visited (finalized for the
    /// priority-queue searches, first-touched for BFS/DFS).
    pub fn is_visited(&self, p: Coord) -> bool {
        self.idx(p).is_some_and(|i| self.visited[i])
    }

    /// Cells in the order they were discovered. A cell whose cost improved
    /// more than once appears once per improvement.
    pub fn discovered(&self) -> impl Iterator<Item = Coord> + '_ {
        self.discovered.iter().map(|&i| self.point(i))
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Make `idx` the root of the parent forest at cost 0.
    #[inline]
    pub(crate) fn set_root(&mut self, idx: usize) {
        self.parent[idx] = idx;
        self.cost[idx] = 0;
    }

    /// Record that `idx` was reached and notify the observer.
    pub(crate) fn discover(&mut self, idx: usize, grid: &Grid, observer: &mut dyn SearchObserver) {
        self.discovered.push(idx);
        let p = self.point(idx);
        if !grid.at(p).is_some_and(CellKind::is_endpoint) {
            observer.on_mark(p, CellKind::Visited);
        }
    }

    /// Convert a coordinate to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Coord) -> Option<usize> {
        if p.row < 0 || p.col < 0 || p.row >= self.rows || p.col >= self.cols {
            return None;
        }
        Some((p.row as usize) * (self.cols as usize) + (p.col as usize))
    }

    /// Convert a flat index back to a coordinate.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Coord {
        let cols = self.cols as usize;
        Coord::new((idx / cols) as i32, (idx % cols) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn heap_pops_lowest_priority_then_row_major() {
        let mut open = BinaryHeap::new();
        open.push(NodeRef { idx: 7, f: 3 });
        open.push(NodeRef { idx: 2, f: 5 });
        open.push(NodeRef { idx: 4, f: 3 });
        open.push(NodeRef { idx: 0, f: 9 });
        let order: Vec<usize> = std::iter::from_fn(|| open.pop().map(|n| n.idx)).collect();
        assert_eq!(order, vec![4, 7, 2, 0]);
    }

    #[test]
    fn fresh_state_is_empty() {
        let grid = Grid::new(4, 6);
        let s = SearchState::new(&grid);
        assert_eq!(s.nodes_explored(), 0);
        assert_eq!(s.parent_of(Coord::new(1, 1)), None);
        assert_eq!(s.cost_at(Coord::new(1, 1)), None);
        assert!(!s.is_visited(Coord::new(3, 5)));
        assert!(!s.is_visited(Coord::new(4, 0)));
    }

    #[test]
    fn root_is_own_parent() {
        let grid = Grid::new(3, 3);
        let mut s = SearchState::new(&grid);
        let p = Coord::new(1, 2);
        let i = s.idx(p).unwrap();
        s.set_root(i);
        assert_eq!(s.parent_of(p), Some(p));
        assert_eq!(s.cost_at(p), Some(0));
    }

    #[test]
    fn index_conversion_matches_grid() {
        let grid = Grid::new(5, 7);
        let s = SearchState::new(&grid);
        for (p, _) in grid.iter() {
            assert_eq!(s.idx(p), grid.index(p));
            assert_eq!(s.point(s.idx(p).unwrap()), p);
        }
        assert_eq!(s.idx(Coord::new(0, 7)), None);
    }
}
