//! The [`Grid`] type: a fixed-size 2D array of [`CellKind`]s.
//!
//! A `Grid` owns its cells outright. Cloning yields an independent copy, which
//! is what lets several search runs work on the same maze without seeing each
//! other's transient markings.

use std::fmt;

use crate::cell::CellKind;
use crate::error::GridError;
use crate::geom::Coord;

/// A `rows × cols` grid of [`CellKind`]s stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: Vec<CellKind>,
    rows: i32,
    cols: i32,
}

impl Grid {
    /// Create a new grid with every cell set to [`CellKind::Wall`].
    pub fn new(rows: i32, cols: i32) -> Self {
        Self::filled(rows, cols, CellKind::Wall)
    }

    /// Create a new grid with every cell set to `kind`.
    pub fn filled(rows: i32, cols: i32, kind: CellKind) -> Self {
        let rows = rows.max(0);
        let cols = cols.max(0);
        Self {
            cells: vec![kind; (rows as usize) * (cols as usize)],
            rows,
            cols,
        }
    }

    /// Parse a grid from lines of glyphs (`# . S E * P`).
    ///
    /// Leading and trailing blank lines are ignored; every remaining line
    /// must have the same width.
    pub fn from_ascii(s: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim_end)
            .skip_while(|l| l.is_empty())
            .collect();
        let end = lines
            .iter()
            .rposition(|l| !l.is_empty())
            .ok_or(GridError::Empty)?;
        let lines = &lines[..=end];

        let cols = lines[0].chars().count() as i32;
        let mut cells = Vec::with_capacity(lines.len() * cols as usize);
        for (row, line) in lines.iter().enumerate() {
            let row = row as i32;
            let found = line.chars().count() as i32;
            if found != cols {
                return Err(GridError::InconsistentSize {
                    row,
                    expected: cols,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let kind = CellKind::from_glyph(ch).ok_or(GridError::InvalidGlyph {
                    ch,
                    pos: Coord::new(row, col as i32),
                })?;
                cells.push(kind);
            }
        }

        Ok(Self {
            cells,
            rows: lines.len() as i32,
            cols,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies within `[0, rows) × [0, cols)`.
    #[inline]
    pub fn contains(&self, p: Coord) -> bool {
        p.row >= 0 && p.col >= 0 && p.row < self.rows && p.col < self.cols
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Coord) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.row as usize) * (self.cols as usize) + (p.col as usize))
    }

    /// Coordinate of a flat row-major index.
    #[inline]
    pub fn coord(&self, idx: usize) -> Coord {
        let cols = self.cols as usize;
        Coord::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Get the cell at a coordinate, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Coord) -> Option<CellKind> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Set the cell at a coordinate. Does nothing if out of bounds.
    #[inline]
    pub fn set(&mut self, p: Coord, kind: CellKind) {
        if let Some(i) = self.index(p) {
            self.cells[i] = kind;
        }
    }

    /// True iff `p` is in bounds and not a wall.
    ///
    /// This is the only movement rule the search algorithms consult.
    #[inline]
    pub fn is_traversable(&self, p: Coord) -> bool {
        matches!(self.at(p), Some(kind) if kind != CellKind::Wall)
    }

    /// Turn every `Visited`/`FinalPath` marking back into `Open`.
    ///
    /// Walls, open cells and endpoint tags are left untouched, so calling
    /// this repeatedly has the same effect as calling it once.
    pub fn clear_transient(&mut self) {
        for c in self.cells.iter_mut() {
            if c.is_transient() {
                *c = CellKind::Open;
            }
        }
    }

    /// First coordinate (row-major) holding `kind`.
    pub fn find(&self, kind: CellKind) -> Option<Coord> {
        self.cells
            .iter()
            .position(|&c| c == kind)
            .map(|i| self.coord(i))
    }

    /// Count how many cells equal `kind`.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    /// Iterate over `(Coord, CellKind)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellKind)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &c)| (self.coord(i), c))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cols == 0 {
            return Ok(());
        }
        for row in self.cells.chunks(self.cols as usize) {
            for c in row {
                write!(f, "{}", c.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
S..#
.#..
...E";

    #[test]
    fn new_is_all_walls() {
        let g = Grid::new(3, 4);
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.count(CellKind::Wall), 12);
        assert!(!g.is_traversable(Coord::new(1, 1)));
    }

    #[test]
    fn set_and_at() {
        let mut g = Grid::new(4, 4);
        let p = Coord::new(3, 2);
        g.set(p, CellKind::Open);
        assert_eq!(g.at(p), Some(CellKind::Open));
        assert_eq!(g.at(Coord::new(0, 0)), Some(CellKind::Wall));
        assert_eq!(g.at(Coord::new(4, 0)), None);
        g.set(Coord::new(-1, 0), CellKind::Open);
        assert_eq!(g.count(CellKind::Open), 1);
    }

    #[test]
    fn traversability() {
        let g = Grid::from_ascii(ROOM).unwrap();
        assert!(g.is_traversable(Coord::new(0, 0)));
        assert!(g.is_traversable(Coord::new(2, 3)));
        assert!(!g.is_traversable(Coord::new(0, 3)));
        assert!(!g.is_traversable(Coord::new(-1, 0)));
        assert!(!g.is_traversable(Coord::new(0, 4)));
    }

    #[test]
    fn index_round_trip() {
        let g = Grid::new(3, 7);
        for i in 0..g.len() {
            assert_eq!(g.index(g.coord(i)), Some(i));
        }
        assert_eq!(g.index(Coord::new(1, 2)), Some(9));
    }

    #[test]
    fn parse_and_display() {
        let g = Grid::from_ascii(ROOM).unwrap();
        assert_eq!(g.find(CellKind::Start), Some(Coord::new(0, 0)));
        assert_eq!(g.find(CellKind::Goal), Some(Coord::new(2, 3)));
        assert_eq!(g.to_string(), format!("{ROOM}\n"));
    }

    #[test]
    fn parse_ignores_surrounding_blank_lines() {
        let g = Grid::from_ascii("\n\n.#\n#.\n\n").unwrap();
        assert_eq!((g.rows(), g.cols()), (2, 2));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(Grid::from_ascii(""), Err(GridError::Empty));
        assert_eq!(
            Grid::from_ascii("..\n...").unwrap_err(),
            GridError::InconsistentSize {
                row: 1,
                expected: 2,
                found: 3
            }
        );
        assert_eq!(
            Grid::from_ascii("..\n.x").unwrap_err(),
            GridError::InvalidGlyph {
                ch: 'x',
                pos: Coord::new(1, 1)
            }
        );
    }

    #[test]
    fn clear_transient_is_idempotent() {
        let mut g = Grid::from_ascii("S*P#\n.*#E").unwrap();
        g.clear_transient();
        let once = g.clone();
        g.clear_transient();
        assert_eq!(g, once);
        assert_eq!(g.to_string(), "S..#\n..#E\n");
    }

    #[test]
    fn clones_are_independent() {
        let a = Grid::filled(2, 2, CellKind::Open);
        let mut b = a.clone();
        b.set(Coord::new(0, 0), CellKind::Visited);
        assert_eq!(a.at(Coord::new(0, 0)), Some(CellKind::Open));
    }
}
