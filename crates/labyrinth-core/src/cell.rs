//! Per-cell wall state.

use crate::Direction;

bitflags::bitflags! {
    /// The set of sides of a cell whose wall has been removed.
    ///
    /// An empty set is a fully walled cell.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Openings: u8 {
        /// The top wall is open.
        const TOP = 0b0001;
        /// The right wall is open.
        const RIGHT = 0b0010;
        /// The bottom wall is open.
        const BOTTOM = 0b0100;
        /// The left wall is open.
        const LEFT = 0b1000;
    }
}

impl Openings {
    /// Returns the flag corresponding to a single direction.
    #[must_use]
    pub const fn from_direction(direction: Direction) -> Self {
        match direction {
            Direction::Top => Self::TOP,
            Direction::Right => Self::RIGHT,
            Direction::Bottom => Self::BOTTOM,
            Direction::Left => Self::LEFT,
        }
    }

    /// Returns `true` if the side in `direction` is open.
    #[must_use]
    pub const fn is_open(self, direction: Direction) -> bool {
        self.contains(Self::from_direction(direction))
    }

    /// Iterates over the open directions in [`Direction::ALL`] order.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |&dir| self.is_open(dir))
    }
}

/// A single maze cell.
///
/// A cell holds only wall data. Its coordinate is implied by its slot in the
/// [`Grid`](crate::Grid), and any visual state belongs to whoever renders it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    openings: Openings,
    order: Option<usize>,
}

impl Cell {
    /// A fully walled cell with no generation order.
    pub const CLOSED: Self = Self {
        openings: Openings::empty(),
        order: None,
    };

    /// Returns the open sides of this cell.
    #[must_use]
    #[inline]
    pub const fn openings(&self) -> Openings {
        self.openings
    }

    /// Returns `true` if the wall in `direction` has been removed.
    #[must_use]
    #[inline]
    pub const fn is_open(&self, direction: Direction) -> bool {
        self.openings.is_open(direction)
    }

    /// Returns the index at which generation first visited this cell.
    #[must_use]
    #[inline]
    pub const fn order(&self) -> Option<usize> {
        self.order
    }

    pub(crate) fn open(&mut self, direction: Direction) {
        self.openings.insert(Openings::from_direction(direction));
    }

    pub(crate) fn set_order(&mut self, order: usize) {
        self.order = Some(order);
    }
}
