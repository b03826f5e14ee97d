//! Core data structures for grid mazes.
//!
//! This crate provides the leaf types shared by maze generation, solving, and
//! interactive sessions. It owns no algorithm beyond bookkeeping: the grid keeps
//! per-cell wall state and guarantees that walls stay consistent between
//! neighbors.
//!
//! # Overview
//!
//! - [`coordinate`]: [`Coordinate`], an `(x, y)` cell address
//! - [`direction`]: [`Direction`], the four sides of a cell in a fixed order
//! - [`cell`]: [`Cell`] and its [`Openings`]
//! - [`grid`]: [`Grid`], the width×height wall topology, and [`GridError`]
//! - [`coordinate_set`]: [`CoordinateSet`], a dense visited-set for traversals
//!
//! # Examples
//!
//! ```
//! use labyrinth_core::{Coordinate, Direction, Grid};
//!
//! let mut grid = Grid::new(3, 2)?;
//! grid.open_wall(Coordinate::new(0, 0), Direction::Right)?;
//!
//! assert!(grid.can_move(Coordinate::new(0, 0), Direction::Right));
//! assert!(grid.can_move(Coordinate::new(1, 0), Direction::Left));
//! assert!(!grid.can_move(Coordinate::new(0, 0), Direction::Bottom));
//! # Ok::<(), labyrinth_core::GridError>(())
//! ```

pub mod cell;
pub mod coordinate;
pub mod coordinate_set;
pub mod direction;
pub mod grid;

pub use self::{
    cell::{Cell, Openings},
    coordinate::{Coordinate, ParseCoordinateError},
    coordinate_set::CoordinateSet,
    direction::{Direction, ParseDirectionError},
    grid::{Grid, GridError, Neighbor, Neighbors},
};
