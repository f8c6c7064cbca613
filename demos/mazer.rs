//! Generate a maze and compare the search algorithms on it.
//!
//! Run: cargo run --bin mazer-demo -- all --seed 42 --show
//! Set RUST_LOG=debug to see generation details.

use mazer_demo::{execute, parse_args, summary_line};

fn main() {
    env_logger::init();

    let result = parse_args(std::env::args().skip(1)).and_then(|opts| {
        let (maze, runs) = execute(&opts)?;
        if let Some(seed) = maze.seed {
            println!(
                "maze {}x{} seed {seed}, start {} goal {}",
                maze.grid.rows(),
                maze.grid.cols(),
                maze.start,
                maze.goal
            );
        }
        for run in &runs {
            println!("{}", summary_line(run));
        }
        if opts.show {
            let mut grid = maze.grid.clone();
            for run in &runs {
                grid.clone_from(&maze.grid);
                for &p in &run.path {
                    grid.set(p, mazer_core::CellKind::FinalPath);
                }
                println!("\n{}:\n{grid}", run.algorithm);
            }
        }
        Ok(())
    });

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
