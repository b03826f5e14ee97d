use labyrinth_core::{Coordinate, Grid, GridError};
use rand_pcg::Pcg64;

use crate::{GenerationEvent, GenerationObserver, GenerationSteps, MazeSeed};

/// Summary of a completed generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedMaze {
    /// The seed the maze was generated from.
    pub seed: MazeSeed,
    /// The cell the walk started from.
    pub start: Coordinate,
    /// The number of walls removed, always `cell_count - 1`.
    pub opened_walls: usize,
}

/// Generates perfect mazes with randomized iterative backtracking.
///
/// The generator carves directly into a caller-owned [`Grid`], resetting it
/// first. For step-by-step control use [`steps_with_seed`](Self::steps_with_seed)
/// or build a [`GenerationSteps`] with a custom random source.
///
/// # Examples
///
/// ```
/// use labyrinth_core::{Coordinate, Grid};
/// use labyrinth_generator::MazeGenerator;
///
/// let mut grid = Grid::new(10, 10)?;
/// let maze = MazeGenerator::new().generate(&mut grid, Coordinate::ORIGIN)?;
/// println!("seed: {}", maze.seed);
///
/// assert_eq!(maze.opened_walls, 99);
/// grid.check_consistency()?;
/// # Ok::<(), labyrinth_core::GridError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct MazeGenerator {}

impl MazeGenerator {
    /// Creates a generator.
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    /// Generates a maze from a freshly drawn random seed.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `start` is outside the grid.
    pub fn generate(&self, grid: &mut Grid, start: Coordinate) -> Result<GeneratedMaze, GridError> {
        self.generate_with_seed(grid, start, MazeSeed::random())
    }

    /// Generates the maze determined by `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `start` is outside the grid.
    pub fn generate_with_seed(
        &self,
        grid: &mut Grid,
        start: Coordinate,
        seed: MazeSeed,
    ) -> Result<GeneratedMaze, GridError> {
        self.generate_with_observer(grid, start, seed, &mut |_: &GenerationEvent| {})
    }

    /// Generates the maze determined by `seed`, reporting every step to
    /// `observer`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `start` is outside the grid.
    pub fn generate_with_observer<O>(
        &self,
        grid: &mut Grid,
        start: Coordinate,
        seed: MazeSeed,
        observer: &mut O,
    ) -> Result<GeneratedMaze, GridError>
    where
        O: GenerationObserver + ?Sized,
    {
        let mut steps = self.steps_with_seed(grid, start, seed)?;
        let opened_walls = steps.run_with(observer)?;
        log::debug!(
            "generated {}x{} maze from {start} with seed {seed}: {opened_walls} walls opened",
            steps.grid().width(),
            steps.grid().height(),
        );
        Ok(GeneratedMaze {
            seed,
            start,
            opened_walls,
        })
    }

    /// Prepares a resumable run for the maze determined by `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `start` is outside the grid.
    pub fn steps_with_seed<'a>(
        &self,
        grid: &'a mut Grid,
        start: Coordinate,
        seed: MazeSeed,
    ) -> Result<GenerationSteps<'a, Pcg64>, GridError> {
        GenerationSteps::new(grid, start, seed.rng())
    }
}
