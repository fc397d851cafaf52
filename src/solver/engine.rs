//! Entropy-guided evolutionary search engine

use super::feasibility::FeasibleSet;
use super::fitness::{EntropyReference, TurnFitness};
use super::genetic::{EvolutionReport, Evolver, GeneticConfig, GenomeSpec};
use super::strategy::Strategy;
use crate::core::{Color, Combination, ConfigError, Score};
use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Search engine parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    pub genetic: GeneticConfig,
    /// Population entropy is measured against
    pub reference: EntropyReference,
    /// Open every game with a fixed guess instead of a search
    pub opening_guess: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(GeneticConfig::default())
    }
}

impl SearchConfig {
    #[must_use]
    pub fn new(genetic: GeneticConfig) -> Self {
        Self {
            genetic,
            reference: EntropyReference::default(),
            opening_guess: true,
        }
    }
}

/// Main search engine
///
/// Each turn it narrows the feasible set with the new history, seeds an
/// optimizer population from it and evolves that population under the
/// feasibility + entropy fitness.
#[derive(Debug)]
pub struct SearchEngine {
    colors: usize,
    pegs: usize,
    config: SearchConfig,
    feasible: FeasibleSet,
    evolver: Evolver,
    rng: StdRng,
    last_generations: usize,
}

impl SearchEngine {
    /// Create a search engine for `colors` colors and `pegs` pegs
    ///
    /// Builds the full possibility space once.
    ///
    /// # Errors
    /// Returns `ConfigError` if the shape is empty, the colors do not fit a
    /// peg value, the possibility space is too large to enumerate or the
    /// optimizer parameters are invalid.
    pub fn new(colors: usize, pegs: usize, config: SearchConfig) -> Result<Self, ConfigError> {
        if colors == 0 {
            return Err(ConfigError::NoColors);
        }
        if colors > usize::from(Color::MAX) + 1 {
            return Err(ConfigError::TooManyColors(colors));
        }
        if pegs == 0 {
            return Err(ConfigError::EmptyCombination);
        }
        Combination::space_size(colors, pegs)?;

        let evolver = Evolver::new(config.genetic, GenomeSpec::new(pegs, colors))?;

        Ok(Self {
            colors,
            pegs,
            config,
            feasible: FeasibleSet::new(colors, pegs),
            evolver,
            rng: StdRng::from_os_rng(),
            last_generations: 0,
        })
    }

    /// Use a deterministic random source
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Combinations consistent with the history of the most recent proposal
    #[must_use]
    pub fn feasible(&self) -> &[Combination] {
        self.feasible.members()
    }

    /// The fixed opening guess: first half color 0, second half color 1
    ///
    /// For four pegs this is `0011`.
    #[must_use]
    pub fn opening_guess(&self) -> Combination {
        let second: Color = if self.colors > 1 { 1 } else { 0 };
        let pegs: Vec<Color> = (0..self.pegs)
            .map(|i| if i < self.pegs / 2 { 0 } else { second })
            .collect();
        Combination::from(pegs)
    }

    /// Sample the initial population from the feasible set
    ///
    /// Distinct members are drawn first; a feasible set smaller than the
    /// population is reused cyclically. Returns an empty seed when nothing
    /// is feasible, which lets the optimizer start from random genomes.
    fn seed(&mut self) -> Vec<Combination> {
        let size = self.config.genetic.population_size;
        let distinct: Vec<&Combination> = self
            .feasible
            .members()
            .choose_multiple(&mut self.rng, size)
            .collect();

        distinct
            .iter()
            .cycle()
            .take(size)
            .map(|&c| c.clone())
            .collect()
    }
}

impl Strategy for SearchEngine {
    fn reset(&mut self) {
        self.feasible.reset();
        self.last_generations = 0;
    }

    fn propose(&mut self, history: &[(Combination, Score)]) -> Combination {
        let feasible_count = self.feasible.sync(history).len();
        self.last_generations = 0;

        if history.is_empty() && self.config.opening_guess {
            return self.opening_guess();
        }

        // Nothing left to search
        if let [only] = self.feasible.members() {
            return only.clone();
        }

        if feasible_count == 0 {
            warn!(
                "No feasible combination remains after {} guesses; falling back to random search",
                history.len()
            );
        }

        let seed = self.seed();
        self.evolver.seed_population(seed);

        let mut fitness = TurnFitness::new(
            history,
            self.feasible.members(),
            self.pegs,
            self.config.reference,
        );
        let EvolutionReport {
            best,
            best_fitness,
            generations,
            ..
        } = self.evolver.evolve(&mut fitness, &mut self.rng);

        debug!(
            "Search: {feasible_count} feasible, best {best} with fitness {best_fitness:.4} after {generations} generations ({} entropies cached)",
            fitness.cached_entries()
        );

        self.last_generations = generations;
        best
    }

    fn pegs(&self) -> usize {
        self.pegs
    }

    fn last_generations(&self) -> usize {
        self.last_generations
    }

    fn feasible_count(&self) -> usize {
        self.feasible.len()
    }
}
