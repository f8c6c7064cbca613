use std::collections::VecDeque;

use mazer_core::{Coord, Grid};

use crate::observer::SearchObserver;
use crate::state::SearchState;

impl SearchState {
    /// Breadth-first search from `start` to `goal` over cardinal moves.
    ///
    /// Cells are marked visited when enqueued, so each is queued at most
    /// once. A cell counts as explored when it is dequeued; the search stops
    /// as soon as the goal is dequeued.
    pub(crate) fn bfs(
        &mut self,
        grid: &Grid,
        start: Coord,
        goal: Coord,
        observer: &mut dyn SearchObserver,
    ) -> bool {
        let (Some(si), Some(gi)) = (self.idx(start), self.idx(goal)) else {
            return false;
        };

        let mut queue: VecDeque<usize> = VecDeque::new();
        self.visited[si] = true;
        self.set_root(si);
        queue.push_back(si);

        while let Some(ci) = queue.pop_front() {
            self.explored += 1;
            if ci == gi {
                return true;
            }

            let cp = self.point(ci);
            let next_dist = self.cost[ci] + 1;
            for np in cp.neighbors_4() {
                if !grid.is_traversable(np) {
                    continue;
                }
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.visited[ni] {
                    continue;
                }
                self.visited[ni] = true;
                self.parent[ni] = ci;
                self.cost[ni] = next_dist;
                queue.push_back(ni);
                self.discover(ni, grid, observer);
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use mazer_core::{CellKind, Coord, Grid};

    use crate::observer::NoopObserver;
    use crate::state::SearchState;

    #[test]
    fn open_grid_explores_every_cell() {
        let grid = Grid::filled(5, 5, CellKind::Open);
        let mut s = SearchState::new(&grid);
        assert!(s.bfs(&grid, Coord::new(0, 0), Coord::new(4, 4), &mut NoopObserver));
        assert_eq!(s.nodes_explored(), 25);
        assert_eq!(s.cost_at(Coord::new(4, 4)), Some(8));
    }

    #[test]
    fn distances_follow_walls() {
        let grid = Grid::from_ascii(
            "\
S#...
.#.#.
...#E",
        )
        .unwrap();
        let mut s = SearchState::new(&grid);
        assert!(s.bfs(&grid, Coord::new(0, 0), Coord::new(2, 4), &mut NoopObserver));
        assert_eq!(s.cost_at(Coord::new(2, 4)), Some(10));
        assert_eq!(s.parent_of(Coord::new(2, 4)), Some(Coord::new(1, 4)));
    }

    #[test]
    fn walled_off_goal_is_not_found() {
        let grid = Grid::from_ascii("S.#E").unwrap();
        let mut s = SearchState::new(&grid);
        assert!(!s.bfs(&grid, Coord::new(0, 0), Coord::new(0, 3), &mut NoopObserver));
        assert_eq!(s.nodes_explored(), 2);
        assert_eq!(s.parent_of(Coord::new(0, 3)), None);
    }
}
