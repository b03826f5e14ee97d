//! Example demonstrating maze generation and solving.
//!
//! This example shows how to:
//! - Create a `Maze` session from a `MazeConfig`
//! - Solve it with breadth-first search
//! - Display the maze, its solution, and the seed
//! - Sample many seeds and keep the maze with the longest solution
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_maze
//! ```
//!
//! Reproduce a maze from a seed printed by an earlier run:
//!
//! ```sh
//! cargo run --example generate_maze -- --seed 5eed0f1abe
//! ```
//!
//! Pick the hardest of many random mazes (by solution length):
//!
//! ```sh
//! cargo run --example generate_maze -- --width 40 --height 20 --samples 1000
//! ```
//!
//! Set `RUST_LOG=debug` to see generation and solving summaries.

use std::process;

use clap::Parser;
use labyrinth_core::{Coordinate, CoordinateSet};
use labyrinth_game::{Maze, MazeConfig};
use labyrinth_generator::MazeSeed;
use labyrinth_solver::Path;
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of columns.
    #[arg(long, default_value_t = 20)]
    width: u32,

    /// Number of rows.
    #[arg(long, default_value_t = 10)]
    height: u32,

    /// Start cell as `x,y`.
    #[arg(long, value_name = "X,Y", default_value = "0,0")]
    start: Coordinate,

    /// Target cell as `x,y` (default: bottom-right cell).
    #[arg(long, value_name = "X,Y")]
    target: Option<Coordinate>,

    /// Hexadecimal seed to reproduce a maze. Disables sampling.
    #[arg(long, value_name = "HEX")]
    seed: Option<MazeSeed>,

    /// Number of random mazes to sample; the one with the longest solution is shown.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    samples: usize,

    /// Mark the solution path in the output.
    #[arg(long)]
    solve: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.samples == 0 {
        eprintln!("--samples must be at least 1.");
        process::exit(1);
    }

    let config = MazeConfig {
        width: args.width,
        height: args.height,
        start: args.start,
        target: args.target,
        seed: None,
    };
    if let Err(err) = config.build_grid() {
        eprintln!("Invalid maze configuration: {err}");
        process::exit(2);
    }

    let seeds = match args.seed {
        Some(seed) => vec![seed],
        None => (0..args.samples).map(|_| MazeSeed::random()).collect(),
    };

    let sampled = seeds.len();
    let mazes = seeds
        .into_par_iter()
        .map(|seed| {
            let maze = Maze::new(MazeConfig {
                seed: Some(seed.value()),
                ..config
            })?;
            let path = maze.solve()?;
            Ok((maze, path))
        })
        .collect::<Result<Vec<_>, labyrinth_game::GameError>>();
    let mazes = match mazes {
        Ok(mazes) => mazes,
        Err(err) => {
            eprintln!("Failed to generate maze: {err}");
            process::exit(1);
        }
    };

    let Some((maze, path)) = mazes.into_iter().max_by_key(|(_, path)| path.edge_count()) else {
        unreachable!("at least one maze is sampled");
    };
    print_maze(&maze, &path, args.solve, sampled);
}

fn print_maze(maze: &Maze, path: &Path, show_path: bool, samples: usize) {
    let start = maze.start();
    let target = maze.target();
    let mut on_path = CoordinateSet::for_grid(maze.grid());
    if show_path {
        for &coord in path {
            on_path.insert(coord);
        }
    }

    let rendered = maze.grid().display_with(move |coord| {
        if coord == start {
            Some('S')
        } else if coord == target {
            Some('T')
        } else if on_path.contains(coord) {
            Some('*')
        } else {
            None
        }
    });

    println!("Seed: {}", maze.seed());
    if samples > 1 {
        println!("Sampled: {samples} mazes (longest solution kept)");
    }
    println!("Size: {}x{}", maze.grid().width(), maze.grid().height());
    println!("Start: {start}");
    println!("Target: {target}");
    println!("Solution length: {} moves", path.edge_count());
    println!(
        "Path coverage: {:.1}% of cells",
        coverage_percent(path.coords().len(), maze.grid().cell_count())
    );
    println!();
    print!("{rendered}");
}

#[expect(clippy::cast_precision_loss)]
fn coverage_percent(path_cells: usize, cells: usize) -> f64 {
    path_cells as f64 * 100.0 / cells as f64
}
