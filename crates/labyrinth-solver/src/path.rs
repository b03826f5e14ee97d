use std::{
    fmt::{self, Display},
    slice,
};

use labyrinth_core::{Coordinate, Direction, Grid};

/// An ordered, non-empty walk from a start cell to a target cell.
///
/// Consecutive coordinates are adjacent. A path with a single coordinate means
/// the start already is the target.
///
/// # Examples
///
/// ```
/// use labyrinth_core::{Coordinate, Direction};
/// use labyrinth_solver::Path;
///
/// let path = Path::new(vec![Coordinate::new(0, 0), Coordinate::new(0, 1)]).unwrap();
/// assert_eq!(path.start(), Coordinate::new(0, 0));
/// assert_eq!(path.target(), Coordinate::new(0, 1));
/// assert_eq!(path.edge_count(), 1);
/// assert_eq!(path.directions().collect::<Vec<_>>(), [Direction::Bottom]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    coords: Vec<Coordinate>,
}

impl Path {
    /// Creates a path from its coordinates.
    ///
    /// Returns `None` if `coords` is empty or two consecutive coordinates are
    /// not adjacent.
    #[must_use]
    pub fn new(coords: Vec<Coordinate>) -> Option<Self> {
        let adjacent = coords
            .windows(2)
            .all(|pair| pair[0].direction_to(pair[1]).is_some());
        (!coords.is_empty() && adjacent).then_some(Self { coords })
    }

    /// Creates the zero-length path consisting of `coord` alone.
    #[must_use]
    pub fn single(coord: Coordinate) -> Self {
        Self {
            coords: vec![coord],
        }
    }

    pub(crate) fn from_reversed(mut coords: Vec<Coordinate>) -> Self {
        debug_assert!(!coords.is_empty());
        coords.reverse();
        Self { coords }
    }

    /// Returns the first coordinate.
    #[must_use]
    pub fn start(&self) -> Coordinate {
        self.coords[0]
    }

    /// Returns the last coordinate.
    #[must_use]
    pub fn target(&self) -> Coordinate {
        self.coords[self.coords.len() - 1]
    }

    /// Returns the number of moves along the path.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.coords.len() - 1
    }

    /// Returns the coordinates from start to target.
    #[must_use]
    pub fn coords(&self) -> &[Coordinate] {
        &self.coords
    }

    /// Iterates over the coordinates from start to target.
    pub fn iter(&self) -> slice::Iter<'_, Coordinate> {
        self.coords.iter()
    }

    /// Consumes the path and returns its coordinates.
    #[must_use]
    pub fn into_coords(self) -> Vec<Coordinate> {
        self.coords
    }

    /// Returns `true` if `coord` lies on the path.
    #[must_use]
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.coords.contains(&coord)
    }

    /// Iterates over the moves needed to walk the path.
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.coords
            .windows(2)
            .filter_map(|pair| pair[0].direction_to(pair[1]))
    }

    /// Returns `true` if every move along the path crosses an open wall of
    /// `grid`.
    #[must_use]
    pub fn is_walkable_in(&self, grid: &Grid) -> bool {
        grid.contains(self.start())
            && self
                .coords
                .windows(2)
                .zip(self.directions())
                .all(|(pair, dir)| grid.can_move(pair[0], dir))
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coordinate;
    type IntoIter = slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, coord) in self.coords.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            Display::fmt(coord, f)?;
        }
        Ok(())
    }
}
