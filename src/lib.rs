//! Mastermind code-breaker
//!
//! Breaks Mastermind combinations with an evolutionary search: every turn a
//! population seeded from the guesses still consistent with the history is
//! evolved towards feasible, maximally informative guesses.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mastermind_evo::core::Combination;
//! use mastermind_evo::game::{Game, GameConfig};
//! use mastermind_evo::solver::StrategyKind;
//!
//! let config = GameConfig::new(6, 4);
//! let strategy = config.strategy(StrategyKind::Evolutionary).unwrap();
//! let hidden = Combination::from_symbols("3211").unwrap();
//!
//! let mut game = Game::new(config.colors, hidden, strategy).unwrap();
//! let outcome = game.play();
//! println!("Won after {} attempts", outcome.attempts);
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Game orchestration
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
