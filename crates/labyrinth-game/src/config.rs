use labyrinth_core::{Coordinate, Grid, GridError};
use serde::{Deserialize, Serialize};

/// Settings a [`Maze`](crate::Maze) session is created from.
///
/// # Examples
///
/// ```
/// use labyrinth_core::Coordinate;
/// use labyrinth_game::MazeConfig;
///
/// let config = MazeConfig::new(20, 10);
/// assert_eq!(config.start, Coordinate::ORIGIN);
/// assert_eq!(config.target(), Coordinate::new(19, 9));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    /// Number of columns; must be positive.
    pub width: u32,
    /// Number of rows; must be positive.
    pub height: u32,
    /// Where generation starts and where the player is placed.
    pub start: Coordinate,
    /// The cell the player must reach; the bottom-right cell if unset.
    pub target: Option<Coordinate>,
    /// A fixed generation seed; a fresh random seed per generation if unset.
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self::new(20, 10)
    }
}

impl MazeConfig {
    /// Creates a configuration for a `width × height` maze, starting at the
    /// top-left cell with the default target and no fixed seed.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            start: Coordinate::ORIGIN,
            target: None,
            seed: None,
        }
    }

    /// Returns the effective target.
    #[must_use]
    pub fn target(&self) -> Coordinate {
        let x = self.width.saturating_sub(1);
        let y = self.height.saturating_sub(1);
        self.target.unwrap_or(Coordinate::new(x, y))
    }

    /// Allocates a closed grid for this configuration and checks that the
    /// start and target lie on it.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidSize`] for a zero dimension, or
    /// [`GridError::OutOfBounds`] for a start or target outside the grid.
    pub fn build_grid(&self) -> Result<Grid, GridError> {
        let grid = Grid::new(self.width, self.height)?;
        grid.check_bounds(self.start)?;
        grid.check_bounds(self.target())?;
        Ok(grid)
    }
}
