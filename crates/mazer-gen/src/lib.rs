//! Solvable maze generation for the mazer search crates.

pub mod config;
pub mod mapgen;

pub use config::MazeConfig;
pub use mapgen::{MazeGen, generate_maze};
