//! Dense coordinate sets for grid traversals.

use crate::{Coordinate, Grid};

/// A set of coordinates within a fixed `width × height` area.
///
/// Membership is stored as one flag per cell in row-major order, and the
/// number of members is tracked so [`len`](Self::len) is constant time.
/// Traversals use it as their visited-set; it is never stored on a [`Grid`].
///
/// # Examples
///
/// ```
/// use labyrinth_core::{Coordinate, CoordinateSet, Grid};
///
/// let grid = Grid::new(4, 4)?;
/// let mut visited = CoordinateSet::for_grid(&grid);
///
/// assert!(visited.insert(Coordinate::new(1, 2)));
/// assert!(!visited.insert(Coordinate::new(1, 2)));
/// assert_eq!(visited.len(), 1);
/// # Ok::<(), labyrinth_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinateSet {
    width: u32,
    height: u32,
    members: Vec<bool>,
    len: usize,
}

impl CoordinateSet {
    /// Creates an empty set sized for the given area.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            members: vec![false; width as usize * height as usize],
            len: 0,
        }
    }

    /// Creates an empty set sized for `grid`.
    #[must_use]
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.width(), grid.height())
    }

    fn index(&self, coord: Coordinate) -> Option<usize> {
        (coord.x < self.width && coord.y < self.height)
            .then(|| coord.y as usize * self.width as usize + coord.x as usize)
    }

    /// Adds `coord` to the set.
    ///
    /// Returns `true` if it was not already present.
    ///
    /// # Panics
    ///
    /// Panics if `coord` lies outside the set's area.
    #[track_caller]
    pub fn insert(&mut self, coord: Coordinate) -> bool {
        let Some(i) = self.index(coord) else {
            panic!(
                "coordinate {coord} outside {}x{} set",
                self.width, self.height
            );
        };
        let added = !self.members[i];
        self.members[i] = true;
        if added {
            self.len += 1;
        }
        added
    }

    /// Returns `true` if `coord` is in the set.
    ///
    /// Coordinates outside the area are never members.
    #[must_use]
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.index(coord).is_some_and(|i| self.members[i])
    }

    /// Returns the number of members.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set has no members.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if every coordinate of the area is a member.
    #[must_use]
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.members.len()
    }

    /// Removes every member.
    pub fn clear(&mut self) {
        self.members.fill(false);
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut set = CoordinateSet::new(3, 2);
        assert!(set.is_empty());

        assert!(set.insert(Coordinate::new(2, 1)));
        assert!(set.contains(Coordinate::new(2, 1)));
        assert!(!set.contains(Coordinate::new(1, 2)));
        assert!(!set.contains(Coordinate::new(5, 5)));
        assert_eq!(set.len(), 1);

        set.clear();
        assert!(set.is_empty());
        assert!(!set.contains(Coordinate::new(2, 1)));
    }

    #[test]
    fn test_full() {
        let mut set = CoordinateSet::new(2, 2);
        for y in 0..2 {
            for x in 0..2 {
                assert!(!set.is_full());
                set.insert(Coordinate::new(x, y));
            }
        }
        assert!(set.is_full());
        assert_eq!(set.len(), 4);
    }

    #[test]
    #[should_panic(expected = "outside 2x2 set")]
    fn test_insert_out_of_area_panics() {
        let mut set = CoordinateSet::new(2, 2);
        set.insert(Coordinate::new(2, 0));
    }
}
