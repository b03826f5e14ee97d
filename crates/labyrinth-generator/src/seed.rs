use std::{
    fmt::{self, Display},
    num::ParseIntError,
    str::FromStr,
};

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg64;

/// A seed for reproducible maze generation.
///
/// The same seed, grid size, and start coordinate always produce the same
/// maze. Seeds are displayed as 16 hexadecimal digits, which [`FromStr`]
/// parses back.
///
/// # Examples
///
/// ```
/// use labyrinth_generator::MazeSeed;
///
/// let seed = MazeSeed::from(42);
/// assert_eq!(seed.to_string(), "000000000000002a");
/// assert_eq!("2a".parse::<MazeSeed>()?, seed);
/// # Ok::<(), labyrinth_generator::ParseSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MazeSeed(u64);

impl MazeSeed {
    /// Draws a fresh seed from the thread-local random source.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::rng().random())
    }

    /// Returns the raw seed value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Creates the deterministic random source for this seed.
    #[must_use]
    pub fn rng(self) -> Pcg64 {
        Pcg64::seed_from_u64(self.0)
    }
}

impl From<u64> for MazeSeed {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Display for MazeSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Error returned when parsing a [`MazeSeed`] fails.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
)]
#[display("invalid maze seed: {_0}")]
pub struct ParseSeedError(ParseIntError);

impl FromStr for MazeSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = u64::from_str_radix(s.trim(), 16)?;
        Ok(Self(value))
    }
}
