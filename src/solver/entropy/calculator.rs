//! Shannon entropy calculation for Mastermind scores
//!
//! Given a candidate guess and a reference population, computes how evenly
//! the candidate would split that population by score.

use crate::core::{Combination, Score};
use rustc_hash::FxHashMap;

/// Calculate Shannon entropy for a candidate against a reference population
///
/// # Formula
/// H(X) = -Σ p(x) * ln(p(x))
///
/// where p(x) is the fraction of the reference population that would
/// receive score x if `candidate` were guessed.
///
/// Returns 0.0 for an empty or single-member reference.
///
/// # Examples
/// ```
/// use mastermind_evo::core::Combination;
/// use mastermind_evo::solver::entropy::calculate_entropy;
///
/// let candidate = Combination::from([0, 1]);
/// let reference = vec![Combination::from([0, 1]), Combination::from([2, 2])];
///
/// // Two equally likely scores: ln(2) nats
/// let entropy = calculate_entropy(&candidate, &reference);
/// assert!((entropy - 2f64.ln()).abs() < 1e-9);
/// ```
#[must_use]
pub fn calculate_entropy(candidate: &Combination, reference: &[Combination]) -> f64 {
    if reference.is_empty() {
        return 0.0;
    }

    let score_counts = group_by_score(candidate, reference);
    shannon_entropy(&score_counts)
}

/// Group the reference population by the score it produces with `candidate`
fn group_by_score(candidate: &Combination, reference: &[Combination]) -> FxHashMap<Score, usize> {
    let mut counts = FxHashMap::default();

    for member in reference {
        let score = Score::calculate(candidate, member);
        *counts.entry(score).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from a score distribution
///
/// H = -Σ p * ln(p)
///
/// # Properties
/// - Returns 0.0 for a certain outcome (one score with p=1)
/// - Maximized for a uniform distribution
/// - Always in range [0, ln(n)] for n distinct scores
/// - Empty buckets are skipped, so `ln(0)` is never evaluated
#[must_use]
pub fn shannon_entropy<S>(score_counts: &std::collections::HashMap<Score, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = score_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    let entropy: f64 = score_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.ln()
        })
        .sum();

    // A single bucket gives -1 * ln(1) = -0.0
    entropy.max(0.0)
}
