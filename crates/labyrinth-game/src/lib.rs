//! Interactive maze sessions.
//!
//! A [`Maze`] ties together a generated grid, the player's position, and the
//! target. It validates player moves, detects when the target is reached, and
//! can solve the maze from wherever the player currently stands.
//!
//! Nothing here renders or schedules anything. A presentation layer reads the
//! session state after each call, and may drive generation or solving one step
//! at a time through [`Maze::regenerate_steps`] and [`Maze::solve_steps`].
//!
//! # Examples
//!
//! ```
//! use labyrinth_core::Coordinate;
//! use labyrinth_game::{Maze, MazeConfig};
//!
//! let config = MazeConfig {
//!     seed: Some(42),
//!     ..MazeConfig::new(6, 4)
//! };
//! let mut maze = Maze::new(config)?;
//! assert_eq!(maze.position(), Coordinate::ORIGIN);
//! assert_eq!(maze.target(), Coordinate::new(5, 3));
//!
//! let path = maze.solve()?;
//! maze.follow_path(&path)?;
//! assert!(maze.is_solved());
//! # Ok::<(), labyrinth_game::GameError>(())
//! ```

pub use self::{config::*, error::*, maze::*};

mod config;
mod error;
mod maze;
