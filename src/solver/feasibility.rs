//! Feasibility filtering against the guess history
//!
//! A candidate is feasible when it would have produced every recorded score
//! had it been the hidden combination.

use crate::core::{Combination, Score};

/// Check whether `candidate` is consistent with every `(guess, score)` pair
///
/// With an empty history every candidate is feasible.
///
/// # Examples
/// ```
/// use mastermind_evo::core::{Combination, Score};
/// use mastermind_evo::solver::feasibility::is_feasible;
///
/// let history = vec![(Combination::from([1, 1, 3, 2]), Score::new(0, 3))];
///
/// assert!(is_feasible(&Combination::from([3, 2, 1, 1]), &history));
/// assert!(!is_feasible(&Combination::from([0, 0, 0, 0]), &history));
/// ```
#[must_use]
pub fn is_feasible(candidate: &Combination, history: &[(Combination, Score)]) -> bool {
    history
        .iter()
        .all(|(guess, recorded)| Score::calculate(guess, candidate) == *recorded)
}

/// Filter `space` down to the candidates consistent with `history`
#[must_use]
pub fn filter_feasible(space: &[Combination], history: &[(Combination, Score)]) -> Vec<Combination> {
    space
        .iter()
        .filter(|&candidate| is_feasible(candidate, history))
        .cloned()
        .collect()
}

/// Narrow an already-filtered feasible set by one new history entry
///
/// The result is always a subset of `feasible`.
pub fn narrow(feasible: &mut Vec<Combination>, guess: &Combination, score: Score) {
    feasible.retain(|candidate| Score::calculate(guess, candidate) == score);
}

/// The possibility space together with its subset consistent with history
///
/// The feasible members are narrowed incrementally as history grows, so
/// they only ever shrink within one game.
#[derive(Debug, Clone)]
pub struct FeasibleSet {
    space: Vec<Combination>,
    members: Vec<Combination>,
    applied: usize,
}

impl FeasibleSet {
    /// Build the full possibility space for `colors` colors and `pegs` pegs
    #[must_use]
    pub fn new(colors: usize, pegs: usize) -> Self {
        let space = Combination::enumerate(colors, pegs);
        let members = space.clone();
        Self {
            space,
            members,
            applied: 0,
        }
    }

    /// Restore every combination of the space, as at the start of a game
    pub fn reset(&mut self) {
        self.members.clone_from(&self.space);
        self.applied = 0;
    }

    /// Bring the feasible members up to date with `history`
    ///
    /// Entries already applied are skipped. A history shorter than what was
    /// applied means a new game started, so filtering restarts from the
    /// full space.
    pub fn sync(&mut self, history: &[(Combination, Score)]) -> &[Combination] {
        if history.len() < self.applied {
            self.reset();
        }
        for (guess, score) in &history[self.applied..] {
            narrow(&mut self.members, guess, *score);
        }
        self.applied = history.len();
        &self.members
    }

    /// The full possibility space
    #[must_use]
    pub fn space(&self) -> &[Combination] {
        &self.space
    }

    /// Combinations consistent with the history applied so far
    #[must_use]
    pub fn members(&self) -> &[Combination] {
        &self.members
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Sum of score differences between a candidate's hypothetical scores and
/// the recorded history
///
/// Zero exactly when the candidate is feasible.
#[must_use]
pub fn history_distance(candidate: &Combination, history: &[(Combination, Score)]) -> u32 {
    history
        .iter()
        .map(|(guess, recorded)| Score::calculate(guess, candidate).distance(*recorded))
        .sum()
}
