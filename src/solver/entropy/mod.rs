//! Entropy-based candidate evaluation
//!
//! Implements Shannon entropy calculation for Mastermind score distributions.
//! This is the informativeness half of the search fitness.

mod cache;
mod calculator;

pub use cache::EntropyCache;
pub use calculator::{calculate_entropy, shannon_entropy};
