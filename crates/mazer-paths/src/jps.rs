//! Jump Point Search (JPS) on 8-connected unit-cost grids.
//!
//! JPS is an A* variant that "jumps" along straight lines and only adds
//! nodes to the open list at *jump points*: the goal, cells with a forced
//! neighbour, and diagonal cells from which a cardinal probe finds a jump
//! point. Each jump costs the Chebyshev distance it covers and Chebyshev
//! distance is the heuristic.
//!
//! Every expanded node probes all eight [`OCTILE`] directions. Diagonal
//! steps are allowed whenever the destination cell is traversable.

use std::collections::BinaryHeap;

use mazer_core::{Coord, Grid, OCTILE, chebyshev};

use crate::observer::SearchObserver;
use crate::state::{NodeRef, SearchState};

impl SearchState {
    pub(crate) fn jps(
        &mut self,
        grid: &Grid,
        start: Coord,
        goal: Coord,
        observer: &mut dyn SearchObserver,
    ) -> bool {
        let (Some(si), Some(gi)) = (self.idx(start), self.idx(goal)) else {
            return false;
        };

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        self.set_root(si);
        open.push(NodeRef {
            idx: si,
            f: chebyshev(start, goal),
        });

        while let Some(cur) = open.pop() {
            let ci = cur.idx;
            if self.visited[ci] {
                continue;
            }
            self.visited[ci] = true;
            self.explored += 1;
            if ci == gi {
                return true;
            }

            let cp = self.point(ci);
            let cur_g = self.cost[ci];

            for dir in OCTILE {
                let Some(jp) = jump(grid, cp + dir, dir, goal) else {
                    continue;
                };
                let Some(ji) = self.idx(jp) else {
                    continue;
                };
                let tentative_g = cur_g + chebyshev(cp, jp);
                if self.visited[ji] || tentative_g >= self.cost[ji] {
                    continue;
                }
                self.cost[ji] = tentative_g;
                self.parent[ji] = ci;
                open.push(NodeRef {
                    idx: ji,
                    f: tentative_g + chebyshev(jp, goal),
                });
                self.discover(ji, grid, observer);
            }
        }

        false
    }
}

// ---------------------------------------------------------------------------
// JPS internals
// ---------------------------------------------------------------------------

/// Probe from `p` (already one step along `dir`) until a jump point is
/// found or the probe leaves the traversable area.
pub(crate) fn jump(grid: &Grid, mut p: Coord, dir: Coord, goal: Coord) -> Option<Coord> {
    loop {
        if !grid.is_traversable(p) {
            return None;
        }
        if p == goal {
            return Some(p);
        }
        if has_forced_neighbor(grid, p, dir) {
            return Some(p);
        }

        // Diagonal: a jump point along either component axis makes this
        // cell a jump point too.
        if dir.is_diagonal() {
            let vertical = Coord::new(dir.row, 0);
            let horizontal = Coord::new(0, dir.col);
            if jump(grid, p + vertical, vertical, goal).is_some()
                || jump(grid, p + horizontal, horizontal, goal).is_some()
            {
                return Some(p);
            }
        }

        p = p + dir;
    }
}

/// Whether moving through `p` along `dir` passes an obstacle that would
/// force a turn.
///
/// Diagonal: a cell diagonally behind one axis is open while the cell
/// directly behind on that axis is blocked. Cardinal: a perpendicular cell
/// one step ahead is open while the perpendicular cell beside `p` is
/// blocked.
pub(crate) fn has_forced_neighbor(grid: &Grid, p: Coord, dir: Coord) -> bool {
    let ok = |dr: i32, dc: i32| grid.is_traversable(p.shift(dr, dc));
    let (dr, dc) = (dir.row, dir.col);

    if dr != 0 && dc != 0 {
        (ok(-dr, dc) && !ok(-dr, 0)) || (ok(dr, -dc) && !ok(0, -dc))
    } else if dr != 0 {
        (ok(dr, 1) && !ok(0, 1)) || (ok(dr, -1) && !ok(0, -1))
    } else if dc != 0 {
        (ok(1, dc) && !ok(1, 0)) || (ok(-1, dc) && !ok(-1, 0))
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use mazer_core::geom::{EAST, SOUTH, SOUTH_EAST};
    use mazer_core::{CellKind, Coord, Grid};

    use super::*;
    use crate::observer::NoopObserver;

    #[test]
    fn cardinal_forced_neighbor() {
        let grid = Grid::from_ascii(
            "\
.#.
...
...",
        )
        .unwrap();
        let p = Coord::new(1, 1);
        assert!(has_forced_neighbor(&grid, p, EAST));
        assert!(!has_forced_neighbor(&grid, p, SOUTH));
    }

    #[test]
    fn diagonal_forced_neighbor() {
        let grid = Grid::from_ascii(
            "\
...
#..
...",
        )
        .unwrap();
        assert!(has_forced_neighbor(&grid, Coord::new(1, 1), SOUTH_EAST));
        let open = Grid::filled(3, 3, CellKind::Open);
        assert!(!has_forced_neighbor(&open, Coord::new(1, 1), SOUTH_EAST));
    }

    #[test]
    fn jump_stops_at_forced_neighbor() {
        let grid = Grid::from_ascii(
            "\
###.##
......
######",
        )
        .unwrap();
        let goal = Coord::new(0, 3);
        assert_eq!(
            jump(&grid, Coord::new(1, 1), EAST, goal),
            Some(Coord::new(1, 2))
        );
    }

    #[test]
    fn jump_runs_off_dead_end() {
        let grid = Grid::from_ascii(
            "\
######
......
######",
        )
        .unwrap();
        assert_eq!(jump(&grid, Coord::new(1, 1), EAST, Coord::new(0, 0)), None);
    }

    #[test]
    fn open_grid_jumps_straight_to_goal() {
        let grid = Grid::filled(10, 10, CellKind::Open);
        let (start, goal) = (Coord::new(0, 0), Coord::new(9, 9));
        let mut s = SearchState::new(&grid);
        assert!(s.jps(&grid, start, goal, &mut NoopObserver));
        assert_eq!(s.nodes_explored(), 2);
        assert_eq!(s.parent_of(goal), Some(start));
        assert_eq!(s.cost_at(goal), Some(9));
    }

    #[test]
    fn walled_off_goal_is_not_found() {
        let grid = Grid::from_ascii(
            "\
S.#..
..#.E",
        )
        .unwrap();
        let mut s = SearchState::new(&grid);
        assert!(!s.jps(&grid, Coord::new(0, 0), Coord::new(1, 4), &mut NoopObserver));
    }
}
