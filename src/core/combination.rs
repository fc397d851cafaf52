//! Mastermind combination representation
//!
//! A Combination is an ordered, fixed-length sequence of peg colors.

use super::{ConfigError, Score};
use std::fmt;
use std::str::FromStr;

/// A peg color, identified by an integer in `[0, colors_count)`
pub type Color = u8;

/// Most pegs a combination may have; score counters are single bytes
pub const MAX_PEGS: usize = u8::MAX as usize;

/// Largest possibility space that is enumerated up front
pub const MAX_SPACE_SIZE: usize = 1 << 22;

/// An immutable sequence of peg colors
///
/// Combinations are plain values: they are cheap to hash and compare, which
/// makes them usable as cache keys and history entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Combination {
    pegs: Box<[Color]>,
}

impl Combination {
    /// Create a combination from its peg colors
    #[must_use]
    pub fn new(pegs: impl Into<Box<[Color]>>) -> Self {
        Self { pegs: pegs.into() }
    }

    /// Parse a combination from a string of digits such as `"3211"`
    ///
    /// # Errors
    /// Returns `ConfigError` if the string is empty or contains a non-digit.
    ///
    /// # Examples
    /// ```
    /// use mastermind_evo::core::Combination;
    ///
    /// let combination = Combination::from_symbols("3211").unwrap();
    /// assert_eq!(combination.pegs(), &[3, 2, 1, 1]);
    ///
    /// assert!(Combination::from_symbols("").is_err());
    /// assert!(Combination::from_symbols("32a1").is_err());
    /// ```
    pub fn from_symbols(symbols: &str) -> Result<Self, ConfigError> {
        let symbols = symbols.trim();
        if symbols.is_empty() {
            return Err(ConfigError::EmptyCombination);
        }

        let pegs = symbols
            .chars()
            .map(|ch| {
                ch.to_digit(10)
                    .map(|digit| digit as Color)
                    .ok_or(ConfigError::InvalidSymbol(ch))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(pegs))
    }

    /// Size of the possibility space, `colors^pegs`
    ///
    /// # Errors
    /// Returns `ConfigError::TooManyPegs` above [`MAX_PEGS`] and
    /// `ConfigError::SpaceTooLarge` when the space exceeds
    /// [`MAX_SPACE_SIZE`].
    ///
    /// # Examples
    /// ```
    /// use mastermind_evo::core::Combination;
    ///
    /// assert_eq!(Combination::space_size(6, 4), Ok(1296));
    /// assert!(Combination::space_size(2, 64).is_err());
    /// ```
    pub fn space_size(colors: usize, pegs: usize) -> Result<usize, ConfigError> {
        if pegs > MAX_PEGS {
            return Err(ConfigError::TooManyPegs(pegs));
        }
        u32::try_from(pegs)
            .ok()
            .and_then(|exponent| colors.checked_pow(exponent))
            .filter(|&size| size <= MAX_SPACE_SIZE)
            .ok_or(ConfigError::SpaceTooLarge { colors, pegs })
    }

    /// Enumerate the full possibility space: every combination of `pegs`
    /// positions over `colors` colors, in lexicographic order
    ///
    /// The result has `colors^pegs` elements. Shapes rejected by
    /// [`Combination::space_size`] yield an empty space.
    #[must_use]
    pub fn enumerate(colors: usize, pegs: usize) -> Vec<Self> {
        if colors == 0 || pegs == 0 {
            return Vec::new();
        }
        let Ok(total) = Self::space_size(colors, pegs) else {
            return Vec::new();
        };
        let mut space = Vec::with_capacity(total);
        let mut current = vec![0 as Color; pegs];

        for _ in 0..total {
            space.push(Self::new(current.clone()));

            // Odometer increment, last position fastest
            for position in (0..pegs).rev() {
                if usize::from(current[position]) + 1 < colors {
                    current[position] += 1;
                    break;
                }
                current[position] = 0;
            }
        }

        space
    }

    /// Get the peg colors
    #[inline]
    #[must_use]
    pub fn pegs(&self) -> &[Color] {
        &self.pegs
    }

    /// Number of pegs
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pegs.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pegs.is_empty()
    }

    /// Highest color used, or `None` for an empty combination
    #[inline]
    #[must_use]
    pub fn max_color(&self) -> Option<Color> {
        self.pegs.iter().copied().max()
    }

    /// Score this combination as a guess against `target`
    #[inline]
    #[must_use]
    pub fn score(&self, target: &Self) -> Score {
        Score::calculate(self, target)
    }

    /// Check that every peg lies in `[0, colors)`
    ///
    /// # Errors
    /// Returns the first out-of-range color.
    pub fn check_colors(&self, colors: usize) -> Result<(), ConfigError> {
        match self.pegs.iter().find(|&&c| usize::from(c) >= colors) {
            Some(&color) => Err(ConfigError::ColorOutOfRange { color, colors }),
            None => Ok(()),
        }
    }

    /// Return a copy with the peg at `position` replaced
    #[must_use]
    pub fn with_peg(&self, position: usize, color: Color) -> Self {
        let mut pegs = self.pegs.clone();
        pegs[position] = color;
        Self { pegs }
    }
}

impl From<Vec<Color>> for Combination {
    fn from(pegs: Vec<Color>) -> Self {
        Self::new(pegs)
    }
}

impl<const N: usize> From<[Color; N]> for Combination {
    fn from(pegs: [Color; N]) -> Self {
        Self::new(pegs.to_vec())
    }
}

impl FromStr for Combination {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbols(s)
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for peg in &self.pegs {
            write!(f, "{peg}")?;
        }
        Ok(())
    }
}
