//! Maze generation parameters.

use mazer_core::{ConfigError, Coord, validate_endpoints};

/// Default grid height.
pub const DEFAULT_ROWS: i32 = 25;
/// Default grid width.
pub const DEFAULT_COLS: i32 = 50;
/// Default chance that an interior wall is knocked out after carving.
pub const DEFAULT_NOISE: f64 = 0.40;

/// Everything [`generate_maze`](crate::generate_maze) needs to build a maze.
///
/// The default is a 25×50 grid from the top-left to the bottom-right corner
/// with 40% noise and no fixed seed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeConfig {
    pub rows: i32,
    pub cols: i32,
    pub start: Coord,
    pub goal: Coord,
    /// Probability in `[0, 1]` that each interior wall becomes open.
    pub noise: f64,
    /// Fixed RNG seed. `None` draws a fresh seed per call.
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self::with_size(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl MazeConfig {
    /// A `rows × cols` configuration with corner endpoints and default noise.
    pub fn with_size(rows: i32, cols: i32) -> Self {
        Self {
            rows,
            cols,
            start: Coord::ZERO,
            goal: Coord::new(rows - 1, cols - 1),
            noise: DEFAULT_NOISE,
            seed: None,
        }
    }

    pub fn with_endpoints(mut self, start: Coord, goal: Coord) -> Self {
        self.start = start;
        self.goal = goal;
        self
    }

    pub fn with_noise(mut self, noise: f64) -> Self {
        self.noise = noise;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check dimensions, endpoints and noise.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_endpoints(self.rows, self.cols, self.start, self.goal)?;
        if !(0.0..=1.0).contains(&self.noise) {
            return Err(ConfigError::InvalidNoise(self.noise));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazer_core::Endpoint;

    #[test]
    fn default_is_valid() {
        let cfg = MazeConfig::default();
        assert_eq!((cfg.rows, cfg.cols), (25, 50));
        assert_eq!(cfg.start, Coord::new(0, 0));
        assert_eq!(cfg.goal, Coord::new(24, 49));
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_noise() {
        for noise in [-0.1, 1.5, f64::NAN] {
            let cfg = MazeConfig::default().with_noise(noise);
            assert!(matches!(cfg.validate(), Err(ConfigError::InvalidNoise(_))));
        }
        assert_eq!(MazeConfig::default().with_noise(0.0).validate(), Ok(()));
        assert_eq!(MazeConfig::default().with_noise(1.0).validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_endpoints() {
        let cfg = MazeConfig::with_size(5, 5).with_endpoints(Coord::new(0, 0), Coord::new(5, 0));
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::OutOfBounds {
                endpoint: Endpoint::Goal,
                pos: Coord::new(5, 0),
                rows: 5,
                cols: 5,
            })
        );
        let cfg = MazeConfig::with_size(0, 5);
        assert!(matches!(cfg.validate(), Err(ConfigError::EmptyGrid { .. })));
    }
}
