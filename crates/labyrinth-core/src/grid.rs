//! The maze grid and its wall topology.

use std::fmt::{self, Display, Write as _};

use tinyvec::ArrayVec;

use crate::{Cell, Coordinate, Direction};

/// Errors reported by [`Grid`] operations.
///
/// Apart from [`InvalidSize`](Self::InvalidSize), these signal a caller that
/// broke a contract (addressing a cell that does not exist, or a wall state
/// that was tampered with) rather than a condition a player can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// A grid dimension was zero.
    #[display("invalid grid size {width}x{height}: both dimensions must be positive")]
    InvalidSize {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// A coordinate lies outside the grid.
    #[display("coordinate {coord} is outside the {width}x{height} grid")]
    OutOfBounds {
        /// The offending coordinate.
        coord: Coordinate,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
    /// The neighbor of a cell in some direction lies outside the grid.
    #[display("cell {coord} has no neighbor to the {direction}")]
    NeighborOutOfBounds {
        /// The cell whose neighbor was requested.
        coord: Coordinate,
        /// The direction of the missing neighbor.
        direction: Direction,
    },
    /// Two adjacent cells disagree about the wall between them.
    #[display("wall on the {direction} side of {coord} is inconsistent with its neighbor")]
    InconsistentWall {
        /// The cell whose wall is inconsistent.
        coord: Coordinate,
        /// The side of the inconsistent wall.
        direction: Direction,
    },
}

impl GridError {
    /// Returns `true` for either out-of-bounds variant.
    #[must_use]
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(
            self,
            Self::OutOfBounds { .. } | Self::NeighborOutOfBounds { .. }
        )
    }
}

/// An in-bounds cell adjacent to some origin cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    /// The neighbor's coordinate.
    pub coord: Coordinate,
    /// The direction from the origin to the neighbor.
    pub direction: Direction,
    /// The direction from the neighbor back to the origin.
    pub opposite: Direction,
}

/// The in-bounds neighbors of a cell, at most one per direction.
pub type Neighbors = ArrayVec<[Neighbor; 4]>;

/// A `width × height` grid of cells.
///
/// The grid is the single owner of wall state. Walls are only ever removed in
/// pairs through [`open_wall`](Self::open_wall), so for two adjacent cells `a`
/// and `b = a.offset(d)`, `a.is_open(d) == b.is_open(d.opposite())` holds at
/// all times. [`check_consistency`](Self::check_consistency) verifies it.
///
/// Cells are stored in row-major order and are mutated in place; a new
/// generation run calls [`reset`](Self::reset) instead of reallocating.
///
/// # Examples
///
/// ```
/// use labyrinth_core::{Coordinate, Direction, Grid, GridError};
///
/// let mut grid = Grid::new(2, 2)?;
/// assert_eq!(grid.cell_count(), 4);
///
/// grid.open_wall(Coordinate::new(0, 0), Direction::Bottom)?;
/// assert!(grid.cell(Coordinate::new(0, 1))?.is_open(Direction::Top));
///
/// let err = grid.open_wall(Coordinate::new(1, 1), Direction::Right);
/// assert!(err.unwrap_err().is_out_of_bounds());
/// # Ok::<(), GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid with every wall closed.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidSize`] if `width` or `height` is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidSize { width, height });
        }
        let cells = vec![Cell::CLOSED; width as usize * height as usize];
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Returns the number of columns.
    #[must_use]
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the total number of cells.
    #[must_use]
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns the bottom-right coordinate.
    #[must_use]
    pub fn last(&self) -> Coordinate {
        Coordinate::new(self.width - 1, self.height - 1)
    }

    /// Returns `true` if `coord` lies within `[0, width) × [0, height)`.
    #[must_use]
    #[inline]
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    /// Returns `Ok(())` if `coord` is inside the grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] otherwise.
    pub fn check_bounds(&self, coord: Coordinate) -> Result<(), GridError> {
        if self.contains(coord) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                coord,
                width: self.width,
                height: self.height,
            })
        }
    }

    fn index(&self, coord: Coordinate) -> Result<usize, GridError> {
        self.check_bounds(coord)?;
        Ok(coord.y as usize * self.width as usize + coord.x as usize)
    }

    /// Returns the cell at `coord`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `coord` is outside the grid.
    pub fn cell(&self, coord: Coordinate) -> Result<&Cell, GridError> {
        let i = self.index(coord)?;
        Ok(&self.cells[i])
    }

    /// Iterates over all coordinates in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Coordinate::new(x, y)))
    }

    /// Iterates over all cells with their coordinates in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, &Cell)> {
        self.coordinates().zip(&self.cells)
    }

    /// Returns the in-bounds neighbors of `coord` in [`Direction::ALL`] order.
    ///
    /// Each neighbor is annotated with the direction leading to it and the
    /// opposite direction leading back. Wall state is not considered. A
    /// coordinate outside the grid has no neighbors.
    #[must_use]
    pub fn neighbors(&self, coord: Coordinate) -> Neighbors {
        if !self.contains(coord) {
            return Neighbors::default();
        }
        Direction::ALL
            .into_iter()
            .filter_map(|direction| {
                let n = coord.offset(direction).filter(|&n| self.contains(n))?;
                Some(Neighbor {
                    coord: n,
                    direction,
                    opposite: direction.opposite(),
                })
            })
            .collect()
    }

    /// Removes the wall on the `direction` side of `coord`, together with the
    /// matching wall of the neighbor on that side.
    ///
    /// Returns the neighbor's coordinate. Opening an already open wall is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `coord` is outside the grid, or
    /// [`GridError::NeighborOutOfBounds`] if there is no cell on that side.
    pub fn open_wall(
        &mut self,
        coord: Coordinate,
        direction: Direction,
    ) -> Result<Coordinate, GridError> {
        let a = self.index(coord)?;
        let neighbor = coord
            .offset(direction)
            .filter(|&n| self.contains(n))
            .ok_or(GridError::NeighborOutOfBounds { coord, direction })?;
        let b = self.index(neighbor)?;
        self.cells[a].open(direction);
        self.cells[b].open(direction.opposite());
        Ok(neighbor)
    }

    /// Records the generation order index of the cell at `coord`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `coord` is outside the grid.
    pub fn set_order(&mut self, coord: Coordinate, order: usize) -> Result<(), GridError> {
        let i = self.index(coord)?;
        self.cells[i].set_order(order);
        Ok(())
    }

    /// Closes every wall and clears generation orders.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::CLOSED);
    }

    /// Returns `true` if a player at `position` may step in `direction`.
    ///
    /// That requires `position` and its neighbor in `direction` to be inside
    /// the grid and the wall between them to be open.
    #[must_use]
    pub fn can_move(&self, position: Coordinate, direction: Direction) -> bool {
        let Ok(cell) = self.cell(position) else {
            return false;
        };
        let Some(neighbor) = position.offset(direction) else {
            return false;
        };
        cell.is_open(direction) && self.contains(neighbor)
    }

    /// Returns the number of passages, counting each opened wall pair once.
    #[must_use]
    pub fn open_wall_count(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| {
                usize::from(cell.is_open(Direction::Right))
                    + usize::from(cell.is_open(Direction::Bottom))
            })
            .sum()
    }

    /// Verifies that every wall agrees with the matching wall of its neighbor
    /// and that no wall on the grid border is open.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InconsistentWall`] for the first offending wall in
    /// row-major, [`Direction::ALL`] order.
    pub fn check_consistency(&self) -> Result<(), GridError> {
        for (coord, cell) in self.cells() {
            for direction in Direction::ALL {
                let neighbor = coord.offset(direction).filter(|&n| self.contains(n));
                let consistent = match neighbor {
                    Some(n) => {
                        cell.is_open(direction) == self.cell(n)?.is_open(direction.opposite())
                    }
                    None => !cell.is_open(direction),
                };
                if !consistent {
                    return Err(GridError::InconsistentWall { coord, direction });
                }
            }
        }
        Ok(())
    }

    /// Returns a text rendering that draws `mark(coord)` inside marked cells.
    ///
    /// The plain [`Display`] output is the same rendering with no marks.
    pub fn display_with<F>(&self, mark: F) -> impl Display + '_
    where
        F: Fn(Coordinate) -> Option<char> + 'static,
    {
        MarkedGrid { grid: self, mark }
    }

    fn fmt_marked(
        &self,
        f: &mut fmt::Formatter<'_>,
        mark: &dyn Fn(Coordinate) -> Option<char>,
    ) -> fmt::Result {
        let cell = |x: u32, y: u32| &self.cells[y as usize * self.width as usize + x as usize];
        for y in 0..self.height {
            for x in 0..self.width {
                let top = if cell(x, y).is_open(Direction::Top) {
                    "  "
                } else {
                    "--"
                };
                write!(f, "+{top}")?;
            }
            f.write_str("+\n")?;
            for x in 0..self.width {
                let c = cell(x, y);
                f.write_char(if c.is_open(Direction::Left) { ' ' } else { '|' })?;
                let m = mark(Coordinate::new(x, y)).unwrap_or(' ');
                write!(f, "{m}{m}")?;
            }
            let right = cell(self.width - 1, y).is_open(Direction::Right);
            f.write_str(if right { " \n" } else { "|\n" })?;
        }
        for x in 0..self.width {
            let bottom = if cell(x, self.height - 1).is_open(Direction::Bottom) {
                "  "
            } else {
                "--"
            };
            write!(f, "+{bottom}")?;
        }
        f.write_str("+\n")
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_marked(f, &|_| None)
    }
}

struct MarkedGrid<'a, F> {
    grid: &'a Grid,
    mark: F,
}

impl<F> Display for MarkedGrid<'_, F>
where
    F: Fn(Coordinate) -> Option<char>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.grid.fmt_marked(f, &self.mark)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_new_rejects_empty_dimensions() {
        assert_eq!(
            Grid::new(0, 3),
            Err(GridError::InvalidSize {
                width: 0,
                height: 3
            })
        );
        assert_eq!(
            Grid::new(3, 0),
            Err(GridError::InvalidSize {
                width: 3,
                height: 0
            })
        );
    }

    #[test]
    fn test_new_grid_is_closed() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.cell_count(), 12);
        assert_eq!(grid.last(), Coordinate::new(3, 2));
        assert_eq!(grid.open_wall_count(), 0);
        for (_, cell) in grid.cells() {
            assert_eq!(*cell, Cell::CLOSED);
        }
        grid.check_consistency().unwrap();
    }

    #[test]
    fn test_cell_out_of_bounds() {
        let grid = Grid::new(2, 2).unwrap();
        let err = grid.cell(Coordinate::new(2, 0)).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds {
                coord: Coordinate::new(2, 0),
                width: 2,
                height: 2
            }
        );
        assert_eq!(err.to_string(), "coordinate (2, 0) is outside the 2x2 grid");
    }

    #[test]
    fn test_neighbors_order_and_filtering() {
        let grid = Grid::new(3, 3).unwrap();

        let center = grid.neighbors(Coordinate::new(1, 1));
        let dirs: Vec<_> = center.iter().map(|n| n.direction).collect();
        assert_eq!(dirs, Direction::ALL);
        for n in center.iter() {
            assert_eq!(n.opposite, n.direction.opposite());
        }

        let corner = grid.neighbors(Coordinate::new(0, 0));
        let coords: Vec<_> = corner.iter().map(|n| n.coord).collect();
        assert_eq!(coords, [Coordinate::new(1, 0), Coordinate::new(0, 1)]);

        let corner = grid.neighbors(Coordinate::new(2, 2));
        let dirs: Vec<_> = corner.iter().map(|n| n.direction).collect();
        assert_eq!(dirs, [Direction::Top, Direction::Left]);
    }

    #[test]
    fn test_neighbors_outside_grid() {
        let grid = Grid::new(2, 2).unwrap();
        // (2, 1) is adjacent to (1, 1) but is not itself a cell.
        assert!(grid.neighbors(Coordinate::new(2, 1)).is_empty());
        assert!(grid.neighbors(Coordinate::new(7, 7)).is_empty());
        assert_eq!(grid.neighbors(Coordinate::new(1, 1)).len(), 2);
    }

    #[test]
    fn test_open_wall_is_paired() {
        let mut grid = Grid::new(2, 2).unwrap();
        let n = grid
            .open_wall(Coordinate::new(1, 1), Direction::Left)
            .unwrap();
        assert_eq!(n, Coordinate::new(0, 1));
        let cell = grid.cell(Coordinate::new(1, 1)).unwrap();
        assert!(cell.is_open(Direction::Left));
        let cell = grid.cell(Coordinate::new(0, 1)).unwrap();
        assert!(cell.is_open(Direction::Right));
        assert_eq!(grid.open_wall_count(), 1);
        grid.check_consistency().unwrap();

        // Opening twice changes nothing.
        grid.open_wall(Coordinate::new(0, 1), Direction::Right)
            .unwrap();
        assert_eq!(grid.open_wall_count(), 1);
    }

    #[test]
    fn test_open_wall_without_neighbor() {
        let mut grid = Grid::new(2, 2).unwrap();
        assert_eq!(
            grid.open_wall(Coordinate::new(0, 0), Direction::Top),
            Err(GridError::NeighborOutOfBounds {
                coord: Coordinate::new(0, 0),
                direction: Direction::Top
            })
        );
        assert!(
            grid.open_wall(Coordinate::new(5, 0), Direction::Left)
                .unwrap_err()
                .is_out_of_bounds()
        );
        assert_eq!(grid.open_wall_count(), 0);
    }

    #[test]
    fn test_can_move() {
        let mut grid = Grid::new(2, 1).unwrap();
        let origin = Coordinate::ORIGIN;
        assert!(!grid.can_move(origin, Direction::Right));

        grid.open_wall(origin, Direction::Right).unwrap();
        assert!(grid.can_move(origin, Direction::Right));
        assert!(grid.can_move(Coordinate::new(1, 0), Direction::Left));
        assert!(!grid.can_move(origin, Direction::Left));
        assert!(!grid.can_move(origin, Direction::Bottom));
        assert!(!grid.can_move(Coordinate::new(9, 9), Direction::Left));
    }

    #[test]
    fn test_reset_closes_everything() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.open_wall(Coordinate::ORIGIN, Direction::Right)
            .unwrap();
        grid.set_order(Coordinate::ORIGIN, 0).unwrap();
        grid.reset();
        assert_eq!(grid, Grid::new(2, 2).unwrap());
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.open_wall(Coordinate::new(0, 0), Direction::Right)
            .unwrap();
        grid.open_wall(Coordinate::new(1, 0), Direction::Bottom)
            .unwrap();
        grid.open_wall(Coordinate::new(1, 1), Direction::Left)
            .unwrap();

        let expected = "\
+--+--+
|     |
+--+  +
|     |
+--+--+
";
        assert_eq!(grid.to_string(), expected);

        let marked = grid
            .display_with(|c| (c == Coordinate::ORIGIN).then_some('*'))
            .to_string();
        assert!(marked.contains("|**   |"));
    }

    proptest! {
        #[test]
        fn test_random_openings_stay_consistent(
            width in 1u32..6,
            height in 1u32..6,
            ops in prop::collection::vec((0u32..6, 0u32..6, 0usize..4), 0..40),
        ) {
            let mut grid = Grid::new(width, height).unwrap();
            for (x, y, d) in ops {
                // Failures are expected for walls on the border.
                let _ = grid.open_wall(Coordinate::new(x, y), Direction::ALL[d]);
                prop_assert!(grid.check_consistency().is_ok());
            }
        }
    }
}
