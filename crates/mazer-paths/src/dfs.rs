//! Depth-first search with an explicit stack.
//!
//! Each stack frame remembers which of the four [`CARDINAL`] directions it
//! will try next, so the traversal visits cells in exactly the order the
//! recursive formulation would: mark on entry, try N, S, W, E in turn, and
//! stop at the first branch that reaches the goal.

use mazer_core::{CARDINAL, Coord, Grid};

use crate::observer::SearchObserver;
use crate::state::SearchState;

struct Frame {
    idx: usize,
    next_dir: usize,
}

impl SearchState {
    pub(crate) fn dfs(
        &mut self,
        grid: &Grid,
        start: Coord,
        goal: Coord,
        observer: &mut dyn SearchObserver,
    ) -> bool {
        let (Some(si), Some(gi)) = (self.idx(start), self.idx(goal)) else {
            return false;
        };
        if !grid.is_traversable(start) {
            return false;
        }

        self.set_root(si);
        self.visited[si] = true;
        self.explored += 1;
        if si == gi {
            return true;
        }

        let mut stack = vec![Frame { idx: si, next_dir: 0 }];

        while let Some(top) = stack.last_mut() {
            let Some(&dir) = CARDINAL.get(top.next_dir) else {
                stack.pop();
                continue;
            };
            top.next_dir += 1;
            let ci = top.idx;

            let np = self.point(ci) + dir;
            if !grid.is_traversable(np) {
                continue;
            }
            let Some(ni) = self.idx(np) else {
                continue;
            };
            if self.visited[ni] {
                continue;
            }

            self.parent[ni] = ci;
            self.cost[ni] = self.cost[ci] + 1;
            self.discover(ni, grid, observer);

            self.visited[ni] = true;
            self.explored += 1;
            if ni == gi {
                return true;
            }
            stack.push(Frame { idx: ni, next_dir: 0 });
        }

        false
    }
}
