//! Cell sides and their unit offsets.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// One side of a cell.
///
/// The variants are listed in the fixed order used everywhere a traversal
/// enumerates neighbors: top, right, bottom, left. Keeping this order stable is
/// what makes seeded generation reproducible.
///
/// The y axis grows downward, so [`Direction::Top`] moves to `y - 1`.
///
/// # Examples
///
/// ```
/// use labyrinth_core::Direction;
///
/// assert_eq!(Direction::Top.opposite(), Direction::Bottom);
/// assert_eq!(Direction::Left.offset(), (-1, 0));
/// assert_eq!("right".parse::<Direction>()?, Direction::Right);
/// # Ok::<(), labyrinth_core::ParseDirectionError>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Toward `y - 1`.
    #[default]
    Top,
    /// Toward `x + 1`.
    Right,
    /// Toward `y + 1`.
    Bottom,
    /// Toward `x - 1`.
    Left,
}

impl Direction {
    /// All directions in enumeration order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Returns the unit `(dx, dy)` offset of this direction.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::Top => (0, -1),
            Self::Right => (1, 0),
            Self::Bottom => (0, 1),
            Self::Left => (-1, 0),
        }
    }

    /// Returns the direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    /// Returns the lowercase name of this direction.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing a [`Direction`] fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown direction: {input:?}")]
pub struct ParseDirectionError {
    #[error(not(source))]
    input: String,
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|dir| dir.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDirectionError {
                input: s.to_owned(),
            })
    }
}
