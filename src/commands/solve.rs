//! Single game solving command
//!
//! Plays one game against a given secret and records every step.

use crate::core::{Combination, ConfigError, Score};
use crate::game::{Game, GameConfig};
use crate::solver::StrategyKind;
use crate::solver::entropy::calculate_entropy;
use crate::solver::feasibility::FeasibleSet;

/// Configuration for solving a secret
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub game: GameConfig,
    pub strategy: StrategyKind,
    pub secret: String,
    pub max_attempts: usize,
    pub seed: Option<u64>,
}

impl SolveConfig {
    #[must_use]
    pub fn new(game: GameConfig, secret: String) -> Self {
        Self {
            game,
            strategy: StrategyKind::default(),
            secret,
            max_attempts: 50,
            seed: None,
        }
    }
}

/// Result of solving a secret
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub success: bool,
    pub secret: Combination,
    pub steps: Vec<SolveStep>,
    pub generations: usize,
}

/// A single attempt in the solution
#[derive(Debug, Clone)]
pub struct SolveStep {
    pub guess: Combination,
    pub score: Score,
    pub feasible_before: usize,
    pub feasible_after: usize,
    pub generations: usize,
    /// Entropy of the guess against the feasible set before it, when more
    /// than one candidate remained
    pub entropy: Option<f64>,
}

/// Solve a specific secret with the configured strategy
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not a valid combination for the game
/// - The game configuration is invalid
pub fn solve_secret(config: &SolveConfig) -> Result<SolveResult, ConfigError> {
    let secret = config.game.parse_secret(&config.secret)?;
    let mut strategy = config.game.strategy(config.strategy)?;
    if let Some(seed) = config.seed {
        strategy = strategy.with_seed(seed);
    }

    let mut game = Game::new(config.game.colors, secret.clone(), strategy)?;
    let mut feasible = FeasibleSet::new(config.game.colors, config.game.pegs);
    let mut steps = Vec::new();

    while game.attempts() < config.max_attempts {
        let feasible_before = feasible.len();
        let generations_before = game.generations();
        let (guess, score) = game.attempt();

        let entropy = (feasible_before > 1).then(|| calculate_entropy(&guess, feasible.members()));
        let feasible_after = feasible.sync(game.history()).len();

        steps.push(SolveStep {
            guess,
            score,
            feasible_before,
            feasible_after,
            generations: game.generations() - generations_before,
            entropy,
        });

        if game.win(score) {
            break;
        }
    }

    Ok(SolveResult {
        success: steps.last().is_some_and(|step| game.win(step.score)),
        secret,
        steps,
        generations: game.generations(),
    })
}
