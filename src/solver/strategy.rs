//! Guess proposal strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::engine::{SearchConfig, SearchEngine};
use super::feasibility::FeasibleSet;
use crate::core::{Combination, ConfigError, Score};
use clap::ValueEnum;
use log::warn;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// A strategy for proposing the next guess of a game
pub trait Strategy {
    /// Forget any per-game state before a new game starts
    fn reset(&mut self);

    /// Propose the next guess given every `(guess, score)` pair so far
    ///
    /// Must always return a member of the possibility space.
    fn propose(&mut self, history: &[(Combination, Score)]) -> Combination;

    /// Number of pegs in every proposed guess
    fn pegs(&self) -> usize;

    /// Optimizer generations spent on the most recent proposal
    fn last_generations(&self) -> usize {
        0
    }

    /// Number of combinations still consistent with the history seen by the
    /// most recent proposal
    fn feasible_count(&self) -> usize;
}

/// Names of the available strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StrategyKind {
    /// Entropy-guided evolutionary search
    #[default]
    Evolutionary,
    /// Random member of the feasible set
    Random,
}

impl StrategyKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Evolutionary => "evolutionary",
            Self::Random => "random",
        }
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug)]
pub enum StrategyType {
    /// Entropy-guided evolutionary search (default)
    Evolutionary(Box<SearchEngine>),
    /// Random member of the feasible set
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn reset(&mut self) {
        match self {
            Self::Evolutionary(s) => s.reset(),
            Self::Random(s) => s.reset(),
        }
    }

    fn propose(&mut self, history: &[(Combination, Score)]) -> Combination {
        match self {
            Self::Evolutionary(s) => s.propose(history),
            Self::Random(s) => s.propose(history),
        }
    }

    fn pegs(&self) -> usize {
        match self {
            Self::Evolutionary(s) => s.pegs(),
            Self::Random(s) => s.pegs(),
        }
    }

    fn last_generations(&self) -> usize {
        match self {
            Self::Evolutionary(s) => s.last_generations(),
            Self::Random(s) => s.last_generations(),
        }
    }

    fn feasible_count(&self) -> usize {
        match self {
            Self::Evolutionary(s) => s.feasible_count(),
            Self::Random(s) => s.feasible_count(),
        }
    }
}

impl StrategyType {
    /// Create the strategy of the given kind
    ///
    /// # Errors
    /// Returns `ConfigError` if the shape or search configuration is invalid.
    pub fn new(
        kind: StrategyKind,
        colors: usize,
        pegs: usize,
        config: SearchConfig,
    ) -> Result<Self, ConfigError> {
        match kind {
            StrategyKind::Random => Ok(Self::Random(RandomStrategy::new(colors, pegs)?)),
            StrategyKind::Evolutionary => Ok(Self::Evolutionary(Box::new(SearchEngine::new(
                colors, pegs, config,
            )?))),
        }
    }

    /// Use a deterministic random source
    #[must_use]
    pub fn with_seed(self, seed: u64) -> Self {
        match self {
            Self::Evolutionary(s) => Self::Evolutionary(Box::new(s.with_seed(seed))),
            Self::Random(s) => Self::Random(s.with_seed(seed)),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> StrategyKind {
        match self {
            Self::Evolutionary(_) => StrategyKind::Evolutionary,
            Self::Random(_) => StrategyKind::Random,
        }
    }
}

/// Random strategy
///
/// Picks a uniformly random feasible combination every turn. Useful as a
/// baseline for the evolutionary search.
#[derive(Debug)]
pub struct RandomStrategy {
    pegs: usize,
    feasible: FeasibleSet,
    rng: StdRng,
}

impl RandomStrategy {
    /// # Errors
    /// Returns `ConfigError` for zero colors or pegs, or a possibility space
    /// too large to enumerate.
    pub fn new(colors: usize, pegs: usize) -> Result<Self, ConfigError> {
        if colors == 0 {
            return Err(ConfigError::NoColors);
        }
        if pegs == 0 {
            return Err(ConfigError::EmptyCombination);
        }
        Combination::space_size(colors, pegs)?;
        Ok(Self {
            pegs,
            feasible: FeasibleSet::new(colors, pegs),
            rng: StdRng::from_os_rng(),
        })
    }

    /// Use a deterministic random source
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }
}

impl Strategy for RandomStrategy {
    fn reset(&mut self) {
        self.feasible.reset();
    }

    fn propose(&mut self, history: &[(Combination, Score)]) -> Combination {
        let members = self.feasible.sync(history);
        if let Some(choice) = members.choose(&mut self.rng) {
            return choice.clone();
        }

        warn!("No feasible combination remains; guessing from the full space");
        self.feasible
            .space()
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_else(|| Combination::from(Vec::<u8>::new()))
    }

    fn pegs(&self) -> usize {
        self.pegs
    }

    fn feasible_count(&self) -> usize {
        self.feasible.len()
    }
}
