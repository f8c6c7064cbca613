//! Connected-component labelling.

use mazer_core::{Coord, Grid};

/// Labels of the 4-connected components of a grid's traversable cells.
///
/// Walls carry no label. Two traversable cells share a label exactly when a
/// cardinal path of traversable cells joins them.
#[derive(Debug, Clone)]
pub struct Components {
    rows: i32,
    cols: i32,
    labels: Vec<i32>,
    count: usize,
}

impl Components {
    /// Label every traversable cell of `grid`.
    pub fn label(grid: &Grid) -> Self {
        let len = grid.len();
        let mut labels = vec![-1; len];
        let mut stack: Vec<usize> = Vec::new();
        let mut label: i32 = 0;

        for start in 0..len {
            if labels[start] >= 0 || !grid.is_traversable(grid.coord(start)) {
                continue;
            }

            // Iterative DFS from `start`.
            stack.clear();
            stack.push(start);
            labels[start] = label;

            while let Some(ci) = stack.pop() {
                for np in grid.coord(ci).neighbors_4() {
                    if !grid.is_traversable(np) {
                        continue;
                    }
                    if let Some(ni) = grid.index(np) {
                        if labels[ni] < 0 {
                            labels[ni] = label;
                            stack.push(ni);
                        }
                    }
                }
            }

            label += 1;
        }

        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            labels,
            count: label as usize,
        }
    }

    /// Component label of `p`, or `None` for walls and out-of-range points.
    pub fn component_at(&self, p: Coord) -> Option<usize> {
        if p.row < 0 || p.col < 0 || p.row >= self.rows || p.col >= self.cols {
            return None;
        }
        let label = self.labels[(p.row * self.cols + p.col) as usize];
        if label < 0 { None } else { Some(label as usize) }
    }

    /// Whether `a` and `b` are both traversable and in the same component.
    pub fn connected(&self, a: Coord, b: Coord) -> bool {
        match (self.component_at(a), self.component_at(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }

    /// Number of distinct components.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }
}
