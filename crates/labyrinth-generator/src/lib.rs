//! Perfect-maze generation by randomized iterative backtracking.
//!
//! Generation carves a spanning tree into a [`Grid`]: starting from one cell it
//! walks to a random unvisited neighbor, opening the wall between them, and
//! backs up along its stack whenever it gets stuck. Every cell ends up reachable
//! from every other cell through exactly one path.
//!
//! # Overview
//!
//! - [`MazeGenerator`]: one-call generation, optionally seeded or observed
//! - [`GenerationSteps`]: the same algorithm as a resumable state machine that
//!   advances one [`GenerationEvent`] per [`step`](GenerationSteps::step)
//! - [`MazeSeed`]: a reproducible seed for the default random source
//!
//! # Examples
//!
//! ```
//! use labyrinth_core::{Coordinate, Grid};
//! use labyrinth_generator::{MazeGenerator, MazeSeed};
//!
//! let mut grid = Grid::new(8, 5)?;
//! let maze = MazeGenerator::new().generate_with_seed(
//!     &mut grid,
//!     Coordinate::ORIGIN,
//!     MazeSeed::from(7),
//! )?;
//!
//! assert_eq!(maze.opened_walls, grid.cell_count() - 1);
//! assert_eq!(grid.open_wall_count(), maze.opened_walls);
//! # Ok::<(), labyrinth_core::GridError>(())
//! ```
//!
//! [`Grid`]: labyrinth_core::Grid

pub use self::{event::*, generator::*, seed::*, steps::*};

mod event;
mod generator;
mod seed;
mod steps;
