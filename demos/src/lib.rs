//! Shared code for the mazer demo binary: argument parsing and reporting.

use std::fmt;

use mazer_core::Maze;
use mazer_gen::{MazeConfig, generate_maze};
use mazer_paths::{Algorithm, SearchError, SearchRun, UnknownAlgorithm, compare_all, run_algorithm};

/// Which runs to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    One(Algorithm),
    All,
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub selection: Selection,
    pub config: MazeConfig,
    /// Print the marked grid after each run.
    pub show: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            selection: Selection::All,
            config: MazeConfig::default(),
            show: false,
        }
    }
}

/// Everything that can go wrong in the demo.
#[derive(Debug)]
pub enum DemoError {
    /// Bad command-line usage.
    Usage(String),
    Algorithm(UnknownAlgorithm),
    Config(mazer_core::ConfigError),
    Search(SearchError),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(msg) => write!(f, "{msg}\n{USAGE}"),
            Self::Algorithm(e) => write!(f, "{e}"),
            Self::Config(e) => write!(f, "{e}"),
            Self::Search(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DemoError {}

impl From<UnknownAlgorithm> for DemoError {
    fn from(e: UnknownAlgorithm) -> Self {
        Self::Algorithm(e)
    }
}

impl From<mazer_core::ConfigError> for DemoError {
    fn from(e: mazer_core::ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<SearchError> for DemoError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

pub const USAGE: &str =
    "usage: mazer-demo [ALGORITHM|all] [--seed N] [--rows R] [--cols C] [--noise P] [--show]";

/// Parse the arguments following the program name.
///
/// Changing `--rows` or `--cols` moves the goal to the new bottom-right
/// corner.
pub fn parse_args<I>(args: I) -> Result<Options, DemoError>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = Options::default();
    let mut rows = opts.config.rows;
    let mut cols = opts.config.cols;
    let mut it = args.into_iter();

    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--seed" => opts.config.seed = Some(value(&mut it, "--seed")?),
            "--rows" => rows = value(&mut it, "--rows")?,
            "--cols" => cols = value(&mut it, "--cols")?,
            "--noise" => opts.config.noise = value(&mut it, "--noise")?,
            "--show" => opts.show = true,
            "all" => opts.selection = Selection::All,
            s if s.starts_with("--") => {
                return Err(DemoError::Usage(format!("unknown option {s}")));
            }
            s => opts.selection = Selection::One(s.parse()?),
        }
    }

    let MazeConfig { noise, seed, .. } = opts.config;
    opts.config = MazeConfig::with_size(rows, cols).with_noise(noise);
    opts.config.seed = seed;
    Ok(opts)
}

fn value<T, I>(it: &mut I, flag: &str) -> Result<T, DemoError>
where
    T: std::str::FromStr,
    I: Iterator<Item = String>,
{
    let raw = it
        .next()
        .ok_or_else(|| DemoError::Usage(format!("{flag} needs a value")))?;
    raw.parse()
        .map_err(|_| DemoError::Usage(format!("invalid value {raw:?} for {flag}")))
}

/// Generate the maze and perform the selected runs.
pub fn execute(opts: &Options) -> Result<(Maze, Vec<SearchRun>), DemoError> {
    let maze = generate_maze(&opts.config)?;
    let runs = match opts.selection {
        Selection::All => compare_all(&maze.grid, maze.start, maze.goal)?,
        Selection::One(alg) => {
            let mut grid = maze.grid.clone();
            vec![run_algorithm(&mut grid, alg, maze.start, maze.goal)?]
        }
    };
    Ok((maze, runs))
}

/// One summary line for a run.
pub fn summary_line(run: &SearchRun) -> String {
    let r = &run.result;
    if !r.found {
        return format!("{:<10} no path (explored {})", run.algorithm.name(), r.nodes_explored);
    }
    format!(
        "{:<10} length {:>4}  explored {:>5}  time {:>7} us  operations {:>8}",
        run.algorithm.name(),
        r.path_length,
        r.nodes_explored,
        r.elapsed.as_micros(),
        r.operations()
    )
}
