//! End-to-end game scenarios

use mastermind_evo::core::{Combination, ConfigError, Score};
use mastermind_evo::game::{Game, GameConfig, GameState};
use mastermind_evo::solver::feasibility::is_feasible;
use mastermind_evo::solver::{GeneticConfig, SearchConfig, SearchEngine, Strategy, StrategyKind};

fn small_search() -> SearchConfig {
    SearchConfig::new(GeneticConfig {
        population_size: 30,
        generations: 15,
        ..GeneticConfig::default()
    })
}

#[test]
fn guessing_the_secret_wins_immediately() {
    let hidden = Combination::from_symbols("3211").unwrap();
    let score = Score::calculate(&hidden, &hidden);
    assert_eq!(score, Score::new(4, 0));
    assert!(score.is_win(4));
}

#[test]
fn misplaced_colors_are_counted() {
    let guess = Combination::from_symbols("1132").unwrap();
    let hidden = Combination::from_symbols("3211").unwrap();
    assert_eq!(Score::calculate(&guess, &hidden), Score::new(0, 3));
}

#[test]
fn feasibility_against_recorded_score() {
    let history = vec![(Combination::from_symbols("1132").unwrap(), Score::new(0, 3))];
    assert!(is_feasible(&Combination::from_symbols("3211").unwrap(), &history));
    assert!(!is_feasible(&Combination::from_symbols("0000").unwrap(), &history));
}

#[test]
fn engine_game_reaches_won_state() {
    let hidden = Combination::from_symbols("3211").unwrap();
    let engine = SearchEngine::new(6, 4, small_search()).unwrap().with_seed(1);
    let mut game = Game::new(6, hidden.clone(), engine).unwrap();

    let outcome = game.play_with_limit(20);
    assert!(outcome.won);
    assert_eq!(game.state(), GameState::Won);
    assert_eq!(outcome.history.last().unwrap().0, hidden);

    // Every guess after the opening agrees with what was known before it
    for turn in 1..outcome.history.len() {
        let (guess, _) = &outcome.history[turn];
        assert!(is_feasible(guess, &outcome.history[..turn]));
    }
}

#[test]
fn generations_accumulate_across_attempts() {
    let hidden = Combination::from_symbols("5025").unwrap();
    let engine = SearchEngine::new(6, 4, small_search()).unwrap().with_seed(2);
    let mut game = Game::new(6, hidden, engine).unwrap();

    let outcome = game.play_with_limit(20);
    assert!(outcome.won);
    // The opening and single-candidate turns run no generations
    assert!(outcome.generations <= (outcome.attempts - 1) * 15);
    assert_eq!(outcome.generations % 15, 0);
}

#[test]
fn strategy_built_from_config_plays() {
    let mut config = GameConfig::new(5, 3);
    config.search = small_search();
    let strategy = config
        .strategy(StrategyKind::Evolutionary)
        .unwrap()
        .with_seed(3);
    let hidden = config.parse_secret("404").unwrap();

    let mut game = Game::new(config.colors, hidden, strategy).unwrap();
    assert!(game.play_with_limit(20).won);
    assert!(game.strategy().feasible_count() >= 1);
}

#[test]
fn hidden_longer_than_engine_guesses_is_rejected() {
    let engine = SearchEngine::new(6, 4, small_search()).unwrap();
    assert_eq!(
        Game::new(6, Combination::from([3, 2, 1, 1, 0]), engine).unwrap_err(),
        ConfigError::LengthMismatch {
            expected: 4,
            actual: 5
        }
    );
}
