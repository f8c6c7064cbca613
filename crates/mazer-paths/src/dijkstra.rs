use std::collections::BinaryHeap;

use mazer_core::{Coord, Grid};

use crate::observer::SearchObserver;
use crate::state::{NodeRef, SearchState};

impl SearchState {
    /// Dijkstra's algorithm over cardinal moves with unit edge weights.
    ///
    /// Stale heap entries are skipped when popped (lazy deletion). A
    /// neighbour is relaxed only if its distance strictly improves and it
    /// has not been finalized yet.
    pub(crate) fn dijkstra(
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
        open.push(NodeRef { idx: si, f: 0 });

        while let Some(current) = open.pop() {
            let ci = current.idx;
            if self.visited[ci] {
                continue;
            }
            self.visited[ci] = true;
            self.explored += 1;
            if ci == gi {
                return true;
            }

            let cp = self.point(ci);
            let tentative = self.cost[ci] + 1;
            for np in cp.neighbors_4() {
                if !grid.is_traversable(np) {
                    continue;
                }
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.visited[ni] || tentative >= self.cost[ni] {
                    continue;
                }
                self.cost[ni] = tentative;
                self.parent[ni] = ci;
                open.push(NodeRef {
                    idx: ni,
                    f: tentative,
                });
                self.discover(ni, grid, observer);
            }
        }

        false
    }
}
