use std::collections::BinaryHeap;

use mazer_core::{Coord, Grid, manhattan};

use crate::observer::SearchObserver;
use crate::state::{NodeRef, SearchState};

impl SearchState {
    /// A* over cardinal moves, ordered by g-score plus Manhattan distance to
    /// the goal.
    ///
    /// Manhattan distance is admissible and consistent for 4-directional
    /// unit-cost movement, so the route found is as short as Dijkstra's.
    pub(crate) fn astar(
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
            f: manhattan(start, goal),
        });

        while let Some(current) = open.pop() {
            let ci = current.idx;
            // Skip stale entries.
            if self.visited[ci] {
                continue;
            }
            self.visited[ci] = true;
            self.explored += 1;
            if ci == gi {
                return true;
            }

            let cp = self.point(ci);
            let tentative_g = self.cost[ci] + 1;
            for np in cp.neighbors_4() {
                if !grid.is_traversable(np) {
                    continue;
                }
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.visited[ni] || tentative_g >= self.cost[ni] {
                    continue;
                }
                self.cost[ni] = tentative_g;
                self.parent[ni] = ci;
                open.push(NodeRef {
                    idx: ni,
                    f: tentative_g + manhattan(np, goal),
                });
                self.discover(ni, grid, observer);
            }
        }

        false
    }
}
