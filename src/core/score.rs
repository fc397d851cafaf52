//! Mastermind feedback score calculation and representation
//!
//! A score is the classic peg feedback for a guess:
//! - exact: pegs with the right color in the right position ("black pegs")
//! - `color_only`: further pegs with a shared color in the wrong position
//!   ("white pegs")

use super::Combination;
use std::fmt;

/// Feedback score for a Mastermind guess
///
/// Invariants: `exact + color_only <= pegs`, and scoring is symmetric,
/// `score(a, b) == score(b, a)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Score {
    exact: u8,
    color_only: u8,
}

impl Score {
    /// Create a score from raw peg counts
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, color_only: u8) -> Self {
        Self { exact, color_only }
    }

    /// Number of exact (position and color) matches
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Number of color-only matches beyond the exact ones
    #[inline]
    #[must_use]
    pub const fn color_only(self) -> u8 {
        self.color_only
    }

    /// Check if this score solves a combination of `pegs` positions
    #[inline]
    #[must_use]
    pub const fn is_win(self, pegs: usize) -> bool {
        self.exact as usize == pegs
    }

    /// Sum of absolute peg differences between two scores
    #[inline]
    #[must_use]
    pub const fn distance(self, other: Self) -> u32 {
        self.exact.abs_diff(other.exact) as u32 + self.color_only.abs_diff(other.color_only) as u32
    }

    /// Calculate the score when `guess` is played against `target`
    ///
    /// # Algorithm
    /// 1. Count positions where both combinations share a color (exact)
    /// 2. For every color present in either combination, sum
    ///    `min(count in guess, count in target)`
    /// 3. Subtract the exact matches to get the color-only matches
    ///
    /// The color range is inferred from the two combinations themselves, so
    /// no fixed palette size is assumed.
    ///
    /// # Panics
    /// Panics if the combinations differ in length.
    ///
    /// # Examples
    /// ```
    /// use mastermind_evo::core::{Combination, Score};
    ///
    /// let guess = Combination::from([1, 1, 3, 2]);
    /// let target = Combination::from([3, 2, 1, 1]);
    ///
    /// assert_eq!(Score::calculate(&guess, &target), Score::new(0, 3));
    /// ```
    #[must_use]
    pub fn calculate(guess: &Combination, target: &Combination) -> Self {
        assert_eq!(
            guess.len(),
            target.len(),
            "cannot score combinations of different lengths"
        );

        let exact = guess
            .pegs()
            .iter()
            .zip(target.pegs())
            .filter(|(g, t)| g == t)
            .count();

        let colors = match (guess.max_color(), target.max_color()) {
            (Some(g), Some(t)) => usize::from(g.max(t)) + 1,
            _ => 0,
        };

        let mut guess_counts = [0u8; 256];
        let mut target_counts = [0u8; 256];
        for &peg in guess.pegs() {
            guess_counts[usize::from(peg)] += 1;
        }
        for &peg in target.pegs() {
            target_counts[usize::from(peg)] += 1;
        }

        let shared: usize = guess_counts[..colors]
            .iter()
            .zip(&target_counts[..colors])
            .map(|(&g, &t)| usize::from(g.min(t)))
            .sum();

        Self {
            exact: exact as u8,
            color_only: (shared - exact) as u8,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.exact, self.color_only)
    }
}
