//! Cell coordinates.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::Direction;

/// The address of a cell, `x` counting columns and `y` counting rows.
///
/// `Coordinate` is a plain value type. Its canonical text form is `(x, y)`,
/// which [`FromStr`] accepts back together with the bare `x,y` form.
///
/// # Examples
///
/// ```
/// use labyrinth_core::{Coordinate, Direction};
///
/// let c = Coordinate::new(2, 0);
/// assert_eq!(c.to_string(), "(2, 0)");
/// assert_eq!("2,0".parse::<Coordinate>()?, c);
///
/// assert_eq!(c.offset(Direction::Bottom), Some(Coordinate::new(2, 1)));
/// assert_eq!(c.offset(Direction::Top), None);
/// # Ok::<(), labyrinth_core::ParseCoordinateError>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// Column, growing to the right.
    pub x: u32,
    /// Row, growing downward.
    pub y: u32,
}

impl Coordinate {
    /// The top-left coordinate.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Creates a coordinate.
    #[must_use]
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Returns the coordinate one step away in `direction`.
    ///
    /// Returns `None` if the step would leave the non-negative quadrant. Upper
    /// bounds are not checked here; see [`Grid::contains`](crate::Grid::contains).
    #[must_use]
    #[inline]
    pub fn offset(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.offset();
        Some(Self {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }

    /// Returns the direction leading from `self` to an adjacent `other`.
    ///
    /// Returns `None` if the two coordinates are not orthogonally adjacent.
    #[must_use]
    pub fn direction_to(self, other: Self) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&dir| self.offset(dir) == Some(other))
    }
}

impl From<(u32, u32)> for Coordinate {
    fn from((x, y): (u32, u32)) -> Self {
        Self::new(x, y)
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Error returned when parsing a [`Coordinate`] fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid coordinate: {input:?}")]
pub struct ParseCoordinateError {
    #[error(not(source))]
    input: String,
}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCoordinateError {
            input: s.to_owned(),
        };
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);
        let (x, y) = inner.split_once(',').ok_or_else(err)?;
        let x = x.trim().parse().map_err(|_| err())?;
        let y = y.trim().parse().map_err(|_| err())?;
        Ok(Self::new(x, y))
    }
}
