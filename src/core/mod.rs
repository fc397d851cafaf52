//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types with no solver logic.
//! All types here are pure, testable, and have clear mathematical properties.

mod combination;
mod error;
mod score;

pub use combination::{Color, Combination, MAX_PEGS, MAX_SPACE_SIZE};
pub use error::ConfigError;
pub use score::Score;
