//! Randomized maze carving.
//!
//! [`MazeGen`] builds a maze in the same stages [`generate_maze`] runs:
//!
//! 1. **Carving**: a depth-first walk from the start cell that moves two
//!    cells at a time in a freshly shuffled cardinal order, opening the cell
//!    in between. On its own this yields a perfect maze on the even lattice
//!    around the start.
//! 2. **Goal patch**: the goal and its up/left neighbours are opened when
//!    they are walls, so a goal off the carved lattice still touches it.
//! 3. **Noise**: each interior wall is opened independently with a fixed
//!    probability, adding cycles so the algorithms have routes to disagree
//!    on.
//! 4. **Repair**: if connectivity labelling still finds the goal cut off
//!    from the start, an L-shaped corridor is dug from the goal until it
//!    meets the start's component.

use std::time::{SystemTime, UNIX_EPOCH};

use mazer_core::{CARDINAL, CellKind, ConfigError, Coord, Grid, Maze};
use mazer_paths::Components;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngExt, SeedableRng};

use crate::config::MazeConfig;

/// Generate a solvable maze from `config`.
///
/// With `config.seed` set, the result is fully determined by the
/// configuration. Without one, a seed is derived from the clock and stored
/// in [`Maze::seed`] so the maze can be reproduced.
pub fn generate_maze(config: &MazeConfig) -> Result<Maze, ConfigError> {
    config.validate()?;
    let seed = config.seed.unwrap_or_else(clock_seed);

    let grid = Grid::new(config.rows, config.cols);
    let mut mg = MazeGen::with_grid(grid, StdRng::seed_from_u64(seed));
    let carved = mg.carve_from(config.start);
    mg.stamp(config.start, config.goal);
    mg.open_goal(config.goal);
    let opened = mg.add_noise(config.noise);
    mg.stamp(config.start, config.goal);
    let dug = mg.connect(config.start, config.goal);

    log::debug!(
        "maze {}x{} seed={seed}: carved {carved}, noise opened {opened}, repair dug {dug}",
        config.rows,
        config.cols
    );

    let mut maze = Maze::new(mg.grid, config.start, config.goal)?;
    maze.seed = Some(seed);
    Ok(maze)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// One pending cell of the carving walk.
struct Frame {
    at: Coord,
    dirs: [Coord; 4],
    next: usize,
}

/// Maze generator operating on a [`Grid`] with a caller-provided RNG.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub grid: Grid,
}

impl<R: Rng> MazeGen<R> {
    /// Create a new MazeGen with the given grid.
    pub fn with_grid(grid: Grid, rng: R) -> Self {
        Self { rng, grid }
    }

    /// Carve passages from `from` with a randomized depth-first walk.
    ///
    /// A neighbour two steps away is entered when it is inside the grid and
    /// has not been entered yet; the cell in between is opened. Each cell
    /// shuffles its directions once, on entry, and tries them in that order
    /// after every sub-walk returns.
    ///
    /// Returns the number of cells entered (including `from`).
    pub fn carve_from(&mut self, from: Coord) -> usize {
        let Some(fi) = self.grid.index(from) else {
            return 0;
        };
        let mut entered = vec![false; self.grid.len()];
        entered[fi] = true;
        self.grid.set(from, CellKind::Open);
        let mut count = 1;
        let mut stack = vec![self.frame(from)];

        while let Some(top) = stack.last_mut() {
            if top.next == top.dirs.len() {
                stack.pop();
                continue;
            }
            let dir = top.dirs[top.next];
            top.next += 1;
            let at = top.at;

            let to = at + dir * 2;
            let Some(ti) = self.grid.index(to) else {
                continue;
            };
            if entered[ti] {
                continue;
            }
            entered[ti] = true;
            self.grid.set(at + dir, CellKind::Open);
            self.grid.set(to, CellKind::Open);
            count += 1;
            let frame = self.frame(to);
            stack.push(frame);
        }

        count
    }

    fn frame(&mut self, at: Coord) -> Frame {
        let mut dirs = CARDINAL;
        dirs.shuffle(&mut self.rng);
        Frame { at, dirs, next: 0 }
    }

    /// Tag the endpoints, overwriting whatever is there.
    pub fn stamp(&mut self, start: Coord, goal: Coord) {
        self.grid.set(start, CellKind::Start);
        self.grid.set(goal, CellKind::Goal);
    }

    /// Open the goal and its up and left neighbours where they are walls.
    pub fn open_goal(&mut self, goal: Coord) {
        for p in [goal, goal.shift(-1, 0), goal.shift(0, -1)] {
            if self.grid.at(p) == Some(CellKind::Wall) {
                self.grid.set(p, CellKind::Open);
            }
        }
    }

    /// Open each wall strictly inside the border with probability `p`.
    ///
    /// Cells are visited in row-major order, one draw per wall. `p` must be
    /// within `[0, 1]`. Returns the number of cells opened.
    pub fn add_noise(&mut self, p: f64) -> usize {
        let mut opened = 0;
        for row in 1..self.grid.rows() - 1 {
            for col in 1..self.grid.cols() - 1 {
                let c = Coord::new(row, col);
                if self.grid.at(c) == Some(CellKind::Wall) && self.rng.random_bool(p) {
                    self.grid.set(c, CellKind::Open);
                    opened += 1;
                }
            }
        }
        opened
    }

    /// Make sure `goal` is reachable from `start` over cardinal moves.
    ///
    /// When it is not, walk from `goal` towards `start`, first along the
    /// column then along the row, opening walls until the walk reaches a
    /// cell of the start's component. Uses no randomness. Returns the number
    /// of walls opened.
    pub fn connect(&mut self, start: Coord, goal: Coord) -> usize {
        let cc = Components::label(&self.grid);
        if cc.connected(start, goal) {
            return 0;
        }
        let Some(target) = cc.component_at(start) else {
            return 0;
        };
        log::warn!("goal {goal} is cut off from start {start}; digging a corridor");

        let mut dug = 0;
        let mut p = goal;
        while p != start && cc.component_at(p) != Some(target) {
            let step = if p.row != start.row {
                Coord::new((start.row - p.row).signum(), 0)
            } else {
                Coord::new(0, (start.col - p.col).signum())
            };
            p = p + step;
            if self.grid.at(p) == Some(CellKind::Wall) {
                self.grid.set(p, CellKind::Open);
                dug += 1;
            }
        }
        dug
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazer_paths::{Algorithm, run_algorithm};

    fn reachable(maze: &Maze) -> bool {
        let mut grid = maze.grid.clone();
        run_algorithm(&mut grid, Algorithm::Bfs, maze.start, maze.goal)
            .map(|run| run.result.found)
            .unwrap_or(false)
    }

    #[test]
    fn always_solvable() {
        for seed in 0..1000 {
            let maze = generate_maze(&MazeConfig::default().with_seed(seed)).unwrap();
            assert!(reachable(&maze), "seed {seed}");
        }
    }

    #[test]
    fn always_solvable_without_noise() {
        for seed in 0..200 {
            let cfg = MazeConfig::with_size(15, 22).with_noise(0.0).with_seed(seed);
            let maze = generate_maze(&cfg).unwrap();
            assert!(reachable(&maze), "seed {seed}");
        }
    }

    #[test]
    fn interior_endpoints_are_repaired() {
        for seed in 0..200 {
            let cfg = MazeConfig::with_size(12, 12)
                .with_endpoints(Coord::new(5, 5), Coord::new(2, 9))
                .with_noise(0.0)
                .with_seed(seed);
            let maze = generate_maze(&cfg).unwrap();
            assert!(reachable(&maze), "seed {seed}");
        }
    }

    #[test]
    fn same_seed_same_maze() {
        let cfg = MazeConfig::default().with_seed(7);
        let a = generate_maze(&cfg).unwrap();
        let b = generate_maze(&cfg).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.seed, Some(7));
    }

    #[test]
    fn unseeded_records_its_seed() {
        let maze = generate_maze(&MazeConfig::with_size(9, 9)).unwrap();
        let seed = maze.seed.unwrap();
        let again = generate_maze(&MazeConfig::with_size(9, 9).with_seed(seed)).unwrap();
        assert_eq!(maze.grid, again.grid);
    }

    #[test]
    fn endpoints_are_tagged() {
        let maze = generate_maze(&MazeConfig::default().with_seed(3)).unwrap();
        assert_eq!(maze.grid.at(maze.start), Some(CellKind::Start));
        assert_eq!(maze.grid.at(maze.goal), Some(CellKind::Goal));
        assert_eq!(maze.grid.count(CellKind::Start), 1);
        assert_eq!(maze.grid.count(CellKind::Goal), 1);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = MazeConfig::default().with_noise(2.0);
        assert_eq!(generate_maze(&cfg), Err(ConfigError::InvalidNoise(2.0)));
    }

    #[test]
    fn carving_opens_the_even_lattice() {
        let mut mg = MazeGen::with_grid(Grid::new(7, 9), StdRng::seed_from_u64(1));
        let entered = mg.carve_from(Coord::ZERO);
        // Every (even, even) cell is entered exactly once.
        assert_eq!(entered, 4 * 5);
        for row in (0..7).step_by(2) {
            for col in (0..9).step_by(2) {
                assert_eq!(mg.grid.at(Coord::new(row, col)), Some(CellKind::Open));
            }
        }
        // A spanning tree over 20 cells opens 19 connectors.
        assert_eq!(mg.grid.count(CellKind::Open), 20 + 19);
        for row in (1..7).step_by(2) {
            for col in (1..9).step_by(2) {
                assert_eq!(mg.grid.at(Coord::new(row, col)), Some(CellKind::Wall));
            }
        }
    }

    #[test]
    fn goal_patch_frees_enclosed_goal() {
        let mut grid = Grid::new(5, 5);
        for col in 0..3 {
            grid.set(Coord::new(0, col), CellKind::Open);
        }
        let (start, goal) = (Coord::new(0, 0), Coord::new(2, 0));
        let mut mg = MazeGen::with_grid(grid, StdRng::seed_from_u64(0));
        mg.stamp(start, goal);
        let enclosed = Maze::new(mg.grid.clone(), start, goal).unwrap();
        assert!(!reachable(&enclosed));

        mg.open_goal(goal);
        assert_eq!(mg.grid.at(Coord::new(1, 0)), Some(CellKind::Open));
        assert_eq!(mg.grid.at(goal), Some(CellKind::Goal));
        let maze = Maze::new(mg.grid, start, goal).unwrap();
        assert!(reachable(&maze));
    }

    #[test]
    fn noise_stays_inside_the_border() {
        let mut mg = MazeGen::with_grid(Grid::new(6, 8), StdRng::seed_from_u64(5));
        let opened = mg.add_noise(1.0);
        assert_eq!(opened, 4 * 6);
        for col in 0..8 {
            assert_eq!(mg.grid.at(Coord::new(0, col)), Some(CellKind::Wall));
            assert_eq!(mg.grid.at(Coord::new(5, col)), Some(CellKind::Wall));
        }
        let mut none = MazeGen::with_grid(Grid::new(6, 8), StdRng::seed_from_u64(5));
        assert_eq!(none.add_noise(0.0), 0);
    }

    #[test]
    fn connect_digs_to_start_component() {
        let grid = Grid::from_ascii(
            "\
S..#####
###.####
#######E",
        )
        .unwrap();
        let (start, goal) = (Coord::new(0, 0), Coord::new(2, 7));
        let mut mg = MazeGen::with_grid(grid, StdRng::seed_from_u64(0));
        let dug = mg.connect(start, goal);
        assert!(dug > 0);
        assert!(Components::label(&mg.grid).connected(start, goal));
        assert_eq!(mg.connect(start, goal), 0);
    }
}
