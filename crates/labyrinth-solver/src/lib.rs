//! Shortest-path solving for grid mazes.
//!
//! The solver runs a breadth-first search over the open walls of a [`Grid`],
//! recording for every discovered cell the cell it was discovered from. When
//! the target is dequeued, following those links back yields a shortest
//! [`Path`]. In a perfect maze that path is also the only one.
//!
//! Neighbors are enqueued in [`Direction::ALL`] order, so the search and the
//! returned path are deterministic even on grids that contain cycles.
//!
//! # Overview
//!
//! - [`BfsSolver`]: one-call solving, optionally observed
//! - [`SolveSteps`]: the same search as a resumable state machine that
//!   advances one [`SolverEvent`] per [`step`](SolveSteps::step)
//! - [`Path`]: the ordered start-to-target result
//! - [`SolverError`]: invalid coordinates or an unreachable target
//!
//! # Examples
//!
//! ```
//! use labyrinth_core::{Coordinate, Direction, Grid};
//! use labyrinth_solver::BfsSolver;
//!
//! let mut grid = Grid::new(2, 2)?;
//! grid.open_wall(Coordinate::new(0, 0), Direction::Bottom)?;
//! grid.open_wall(Coordinate::new(0, 1), Direction::Right)?;
//!
//! let path = BfsSolver::new().solve(&grid, Coordinate::new(0, 0), Coordinate::new(1, 1))?;
//! assert_eq!(path.edge_count(), 2);
//! assert_eq!(path.coords()[1], Coordinate::new(0, 1));
//! # Ok::<(), labyrinth_solver::SolverError>(())
//! ```
//!
//! [`Grid`]: labyrinth_core::Grid
//! [`Direction::ALL`]: labyrinth_core::Direction::ALL

pub use self::{error::*, event::*, path::*, solver::*, steps::*};

mod error;
mod event;
mod path;
mod solver;
mod steps;
