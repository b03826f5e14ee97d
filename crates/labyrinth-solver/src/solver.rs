use labyrinth_core::{Coordinate, Grid};

use crate::{Path, SolveSteps, SolverError, SolverEvent, SolverObserver};

/// Finds shortest paths through a maze with breadth-first search.
///
/// The solver only reads the grid. The start does not have to be the cell the
/// maze was generated from; an interactive caller passes the player's current
/// position so the maze can be re-solved midway.
///
/// # Examples
///
/// ```
/// use labyrinth_core::{Coordinate, Grid};
/// use labyrinth_generator::{MazeGenerator, MazeSeed};
/// use labyrinth_solver::BfsSolver;
///
/// let mut grid = Grid::new(12, 8)?;
/// MazeGenerator::new().generate_with_seed(&mut grid, Coordinate::ORIGIN, MazeSeed::from(3))?;
///
/// let path = BfsSolver::new().solve(&grid, Coordinate::ORIGIN, grid.last())?;
/// assert_eq!(path.start(), Coordinate::ORIGIN);
/// assert_eq!(path.target(), grid.last());
/// assert!(path.is_walkable_in(&grid));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct BfsSolver {}

impl BfsSolver {
    /// Creates a solver.
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    /// Prepares a resumable search from `start` to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Grid`] if either coordinate is outside the grid.
    pub fn steps<'a>(
        &self,
        grid: &'a Grid,
        start: Coordinate,
        target: Coordinate,
    ) -> Result<SolveSteps<'a>, SolverError> {
        SolveSteps::new(grid, start, target)
    }

    /// Returns a shortest path from `start` to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Grid`] if either coordinate is outside the grid,
    /// or [`SolverError::UnreachableTarget`] if no path exists.
    pub fn solve(
        &self,
        grid: &Grid,
        start: Coordinate,
        target: Coordinate,
    ) -> Result<Path, SolverError> {
        self.solve_with_observer(grid, start, target, &mut |_: &SolverEvent| {})
    }

    /// Returns a shortest path from `start` to `target`, reporting every
    /// search step to `observer`.
    ///
    /// # Errors
    ///
    /// See [`solve`](Self::solve).
    pub fn solve_with_observer<O>(
        &self,
        grid: &Grid,
        start: Coordinate,
        target: Coordinate,
        observer: &mut O,
    ) -> Result<Path, SolverError>
    where
        O: SolverObserver + ?Sized,
    {
        self.steps(grid, start, target)?.run_with(observer)
    }
}
