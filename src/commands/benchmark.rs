//! Benchmark command
//!
//! Plays many games on random secrets and summarizes the results.

use super::statistics::GameTally;
use crate::core::ConfigError;
use crate::game::{Game, GameConfig};
use crate::solver::StrategyKind;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub game: GameConfig,
    pub strategy: StrategyKind,
    pub games: usize,
    /// Games not won within this many attempts count as failed
    pub max_attempts: usize,
    pub seed: Option<u64>,
    pub progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub fn new(game: GameConfig, games: usize) -> Self {
        Self {
            game,
            strategy: StrategyKind::default(),
            games,
            max_attempts: 20,
            seed: None,
            progress: true,
        }
    }
}

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub strategy: &'static str,
    pub tally: GameTally,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Run a benchmark over `config.games` random secrets
///
/// # Errors
/// Returns `ConfigError` if the game configuration is invalid.
pub fn run_benchmark(config: &BenchmarkConfig) -> Result<BenchmarkResult, ConfigError> {
    let mut strategy = config.game.strategy(config.strategy)?;
    let mut rng = match config.seed {
        Some(seed) => {
            strategy = strategy.with_seed(seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };
    let strategy_name = strategy.kind().name();

    let pb = if config.progress {
        ProgressBar::new(config.games as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut tally = GameTally::new();
    let mut game = Game::new(
        config.game.colors,
        config.game.random_secret(&mut rng),
        strategy,
    )?;

    for index in 0..config.games {
        if index > 0 {
            game.set_hidden(config.game.random_secret(&mut rng))?;
        }
        let outcome = game.play_with_limit(config.max_attempts);
        tally.record(&outcome);

        if let Some(stats) = tally.attempts() {
            pb.set_message(format!("Avg: {:.2}", stats.mean));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    Ok(BenchmarkResult {
        strategy: strategy_name,
        games_per_second: tally.games() as f64 / duration.as_secs_f64().max(f64::EPSILON),
        tally,
        duration,
    })
}
