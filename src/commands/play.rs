//! Repeated play against hidden combinations
//!
//! Plays games one after another, either against a fixed secret or a fresh
//! random one per game, and keeps running statistics.

use super::statistics::GameTally;
use crate::core::{Combination, ConfigError};
use crate::game::{Game, GameConfig, GameOutcome};
use crate::solver::StrategyKind;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for a play session
#[derive(Debug, Clone)]
pub struct PlayConfig {
    pub game: GameConfig,
    pub strategy: StrategyKind,
    /// Fixed secret for every game; random per game when `None`
    pub secret: Option<Combination>,
    /// Number of games; unlimited when `None`
    pub games: Option<usize>,
    /// Attempt cap per game; unlimited when `None`
    pub max_attempts: Option<usize>,
    /// Seed for secrets and strategy; entropy from the OS when `None`
    pub seed: Option<u64>,
}

impl PlayConfig {
    #[must_use]
    pub fn new(game: GameConfig) -> Self {
        Self {
            game,
            strategy: StrategyKind::default(),
            secret: None,
            games: None,
            max_attempts: None,
            seed: None,
        }
    }
}

/// Play games until `config.games` is reached (or forever)
///
/// `on_game` is called after every game with its 1-based index, outcome and
/// the tally including that game.
///
/// # Errors
/// Returns `ConfigError` if the game configuration or the fixed secret is
/// invalid.
pub fn run_play<F>(config: &PlayConfig, mut on_game: F) -> Result<GameTally, ConfigError>
where
    F: FnMut(usize, &GameOutcome, &GameTally),
{
    let mut strategy = config.game.strategy(config.strategy)?;
    let mut rng = match config.seed {
        Some(seed) => {
            strategy = strategy.with_seed(seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let first = match &config.secret {
        Some(secret) => {
            config.game.check_secret(secret)?;
            secret.clone()
        }
        None => config.game.random_secret(&mut rng),
    };
    let mut game = Game::new(config.game.colors, first, strategy)?;
    let mut tally = GameTally::new();

    let mut index = 0;
    while config.games.is_none_or(|games| index < games) {
        if index > 0 && config.secret.is_none() {
            game.set_hidden(config.game.random_secret(&mut rng))?;
        }

        let outcome = match config.max_attempts {
            Some(max) => game.play_with_limit(max),
            None => game.play(),
        };

        index += 1;
        tally.record(&outcome);
        on_game(index, &outcome, &tally);
    }

    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::GeneticConfig;

    fn small_config() -> PlayConfig {
        let mut game = GameConfig::new(4, 3);
        game.search.genetic = GeneticConfig {
            population_size: 20,
            generations: 10,
            ..GeneticConfig::default()
        };
        let mut config = PlayConfig::new(game);
        config.games = Some(5);
        config.max_attempts = Some(20);
        config.seed = Some(8);
        config
    }

    #[test]
    fn plays_requested_number_of_games() {
        let config = small_config();
        let mut seen = Vec::new();

        let tally = run_play(&config, |index, outcome, tally| {
            assert_eq!(tally.games(), index);
            seen.push(outcome.attempts);
        })
        .unwrap();

        assert_eq!(tally.games(), 5);
        assert_eq!(tally.won(), 5);
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn fixed_secret_is_played_every_game() {
        let mut config = small_config();
        config.secret = Some(Combination::from([3, 0, 2]));
        config.games = Some(3);

        run_play(&config, |_, outcome, _| {
            let (last, score) = outcome.history.last().unwrap();
            assert_eq!(last, &Combination::from([3, 0, 2]));
            assert!(score.is_win(3));
        })
        .unwrap();
    }

    #[test]
    fn rejects_mismatched_secret() {
        let mut config = small_config();
        config.secret = Some(Combination::from([1, 2]));
        assert_eq!(
            run_play(&config, |_, _, _| {}).unwrap_err(),
            ConfigError::LengthMismatch {
                expected: 3,
                actual: 2
            }
        );

        config.secret = Some(Combination::from([1, 2, 6]));
        assert!(matches!(
            run_play(&config, |_, _, _| {}),
            Err(ConfigError::ColorOutOfRange { color: 6, .. })
        ));
    }

    #[test]
    fn random_strategy_plays_too() {
        let mut config = small_config();
        config.strategy = StrategyKind::Random;
        let tally = run_play(&config, |_, _, _| {}).unwrap();
        assert_eq!(tally.won(), 5);
    }

    #[test]
    fn zero_games_plays_nothing() {
        let mut config = small_config();
        config.games = Some(0);
        let tally = run_play(&config, |_, _, _| unreachable!()).unwrap();
        assert_eq!(tally.games(), 0);
    }
}
