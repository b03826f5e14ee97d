use labyrinth_core::{Coordinate, GridError};

/// Errors that can occur while solving a maze.
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
pub enum SolverError {
    /// The start or target coordinate does not address a cell of the grid.
    #[display("{_0}")]
    Grid(#[from] GridError),
    /// The search exhausted every reachable cell without finding the target.
    ///
    /// A maze produced by the generator is fully connected, so this indicates
    /// a hand-built or partially generated grid. Callers typically react by
    /// regenerating.
    #[display("target {target} is unreachable from {start}")]
    UnreachableTarget {
        /// Where the search started.
        start: Coordinate,
        /// The cell that could not be reached.
        target: Coordinate,
    },
}
