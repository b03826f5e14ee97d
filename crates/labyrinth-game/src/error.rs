use labyrinth_core::{Coordinate, Direction, GridError};
use labyrinth_solver::SolverError;

/// Errors that can occur during a maze session.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
    derive_more::IsVariant,
)]
pub enum GameError {
    /// The configuration or a coordinate does not fit the grid.
    #[display("{_0}")]
    Grid(#[from] GridError),
    /// Solving failed.
    #[display("{_0}")]
    Solver(#[from] SolverError),
    /// The player tried to walk through a wall or off the grid.
    ///
    /// The session is unchanged; a presenter typically flashes the cell.
    #[display("cannot move {direction} from {position}")]
    InvalidMove {
        /// The player's position.
        position: Coordinate,
        /// The requested direction.
        direction: Direction,
    },
    /// A path to follow does not start at the player's position.
    #[display("path starts at {path_start}, but the player is at {position}")]
    PathMismatch {
        /// The player's position.
        position: Coordinate,
        /// The first coordinate of the path.
        path_start: Coordinate,
    },
}
