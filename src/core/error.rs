//! Configuration errors reported at setup time

use thiserror::Error;

/// Error type for invalid game or search configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Number of colors must be at least 1")]
    NoColors,
    #[error("Combinations are written with single digits, so at most 10 colors are supported (got {0})")]
    TooManyColors(usize),
    #[error("Combination must contain at least one peg")]
    EmptyCombination,
    #[error("At most 255 pegs are supported (got {0})")]
    TooManyPegs(usize),
    #[error("{colors} colors over {pegs} pegs is too large a possibility space to enumerate")]
    SpaceTooLarge { colors: usize, pegs: usize },
    #[error("Invalid color symbol '{0}' (expected a digit)")]
    InvalidSymbol(char),
    #[error("Color {color} is out of range for {colors} colors")]
    ColorOutOfRange { color: u8, colors: usize },
    #[error("Combination must have {expected} pegs, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("Invalid genetic configuration: {0}")]
    InvalidGeneticConfig(&'static str),
}
