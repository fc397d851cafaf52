//! Search fitness: feasibility first, informativeness second
//!
//! Feasible candidates score `1.0 + entropy`, infeasible ones a normalized
//! distance in `[0.0, 1.0)`, so any feasible candidate outranks every
//! infeasible one while the infeasible range still slopes towards
//! feasibility.

use super::entropy::{EntropyCache, calculate_entropy};
use super::feasibility::{history_distance, is_feasible};
use super::genetic::FitnessFunction;
use crate::core::{Combination, Score};
use clap::ValueEnum;

/// Largest fitness an infeasible candidate can receive
pub const MAX_INFEASIBLE_FITNESS: f64 = 1.0 - f64::EPSILON;

/// Base fitness of every feasible candidate
pub const FEASIBLE_BASE_FITNESS: f64 = 1.0;

/// Which population entropy is measured against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum EntropyReference {
    /// The full feasible set for the turn (precise, more expensive)
    #[default]
    #[value(name = "feasible")]
    FeasibleSet,
    /// The optimizer's current generation (cheap, approximate)
    Population,
}

/// Normalized distance of an infeasible candidate from feasibility
///
/// `1 - clamp(Σ(|Δexact| + |Δcolor_only|) / (len(history) * pegs), 0, 1)`,
/// capped strictly below 1.0. Returns 0.0 for an empty history.
#[must_use]
pub fn normalized_distance(
    candidate: &Combination,
    history: &[(Combination, Score)],
    pegs: usize,
) -> f64 {
    if history.is_empty() || pegs == 0 {
        return 0.0;
    }

    let distance = f64::from(history_distance(candidate, history));
    let scale = (history.len() * pegs) as f64;

    (1.0 - (distance / scale).clamp(0.0, 1.0)).min(MAX_INFEASIBLE_FITNESS)
}

/// Fitness of candidates for one turn of the search
///
/// Owns the turn's entropy cache. In feasible-set mode the cache lives for
/// the whole turn; in population mode it is cleared every generation
/// because the reference changes.
#[derive(Debug)]
pub struct TurnFitness<'a> {
    history: &'a [(Combination, Score)],
    feasible: &'a [Combination],
    pegs: usize,
    reference: EntropyReference,
    population: Vec<Combination>,
    cache: EntropyCache,
}

impl<'a> TurnFitness<'a> {
    #[must_use]
    pub fn new(
        history: &'a [(Combination, Score)],
        feasible: &'a [Combination],
        pegs: usize,
        reference: EntropyReference,
    ) -> Self {
        Self {
            history,
            feasible,
            pegs,
            reference,
            population: Vec::new(),
            cache: EntropyCache::new(),
        }
    }

    /// The reference population entropy is currently measured against
    #[must_use]
    pub fn reference_population(&self) -> &[Combination] {
        match self.reference {
            EntropyReference::FeasibleSet => self.feasible,
            EntropyReference::Population => &self.population,
        }
    }

    /// Entropy of `candidate` against the current reference
    #[must_use]
    pub fn entropy(&self, candidate: &Combination) -> f64 {
        self.cache.get(candidate).unwrap_or_else(|| {
            calculate_entropy(candidate, self.reference_population())
        })
    }

    #[must_use]
    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }
}

impl FitnessFunction for TurnFitness<'_> {
    fn prepare(&mut self, population: &[Combination]) {
        if self.reference == EntropyReference::Population {
            self.population.clear();
            self.population.extend_from_slice(population);
            self.cache.clear();
        }

        let feasible_members: Vec<&Combination> = population
            .iter()
            .filter(|candidate| is_feasible(candidate, self.history))
            .collect();

        let reference = match self.reference {
            EntropyReference::FeasibleSet => self.feasible,
            EntropyReference::Population => &self.population,
        };
        self.cache.fill(feasible_members, reference);
    }

    fn evaluate(&self, candidate: &Combination) -> f64 {
        if is_feasible(candidate, self.history) {
            FEASIBLE_BASE_FITNESS + self.entropy(candidate)
        } else {
            normalized_distance(candidate, self.history, self.pegs)
        }
    }
}
