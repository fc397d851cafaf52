//! Game orchestration
//!
//! Holds the hidden combination and the guess history, and drives a
//! strategy until it wins.

use super::config::MAX_COLORS;
use crate::core::{Combination, ConfigError, Score};
use crate::solver::Strategy;
use log::{debug, info};

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    NotStarted,
    Playing,
    Won,
}

/// Result of a played game
#[derive(Debug, Clone)]
pub struct GameOutcome {
    pub won: bool,
    pub attempts: usize,
    /// Optimizer generations summed over every attempt
    pub generations: usize,
    pub history: Vec<(Combination, Score)>,
}

/// A single Mastermind game between a hidden combination and a strategy
#[derive(Debug)]
pub struct Game<S> {
    colors: usize,
    hidden: Combination,
    strategy: S,
    history: Vec<(Combination, Score)>,
    attempts: usize,
    generations: usize,
    state: GameState,
}

impl<S: Strategy> Game<S> {
    /// Create a game over `colors` colors with the given hidden combination
    ///
    /// # Errors
    /// Returns `ConfigError` if there are no colors, more than can be
    /// written as digits, or the hidden combination does not fit the palette
    /// and the strategy's peg count.
    pub fn new(colors: usize, hidden: Combination, strategy: S) -> Result<Self, ConfigError> {
        if colors == 0 {
            return Err(ConfigError::NoColors);
        }
        if colors > MAX_COLORS {
            return Err(ConfigError::TooManyColors(colors));
        }
        check_hidden(&hidden, colors, strategy.pegs())?;

        Ok(Self {
            colors,
            hidden,
            strategy,
            history: Vec::new(),
            attempts: 0,
            generations: 0,
            state: GameState::NotStarted,
        })
    }

    /// Replace the hidden combination and reset the game
    ///
    /// # Errors
    /// Returns `ConfigError` if the combination is empty, has a different
    /// length than the strategy's guesses or uses a color outside the
    /// palette; the current game is kept in that case.
    pub fn set_hidden(&mut self, hidden: Combination) -> Result<(), ConfigError> {
        check_hidden(&hidden, self.colors, self.strategy.pegs())?;
        self.hidden = hidden;
        self.reset();
        Ok(())
    }

    /// Clear the history and counters and reset the strategy
    pub fn reset(&mut self) {
        self.history.clear();
        self.attempts = 0;
        self.generations = 0;
        self.state = GameState::NotStarted;
        self.strategy.reset();
    }

    /// Play one turn: propose, score against the hidden combination and
    /// record the result
    ///
    /// # Panics
    /// Panics if the strategy proposes a guess shorter or longer than its
    /// own peg count.
    pub fn attempt(&mut self) -> (Combination, Score) {
        let guess = self.strategy.propose(&self.history);
        let score = Score::calculate(&guess, &self.hidden);

        self.attempts += 1;
        self.generations += self.strategy.last_generations();
        self.history.push((guess.clone(), score));
        self.state = if self.win(score) {
            GameState::Won
        } else {
            GameState::Playing
        };

        info!("Attempt: {guess}, Score: {score}");
        (guess, score)
    }

    /// Whether `score` is a winning score for this game
    #[must_use]
    pub fn win(&self, score: Score) -> bool {
        score.is_win(self.hidden.len())
    }

    /// Reset and play until the hidden combination is found
    ///
    /// There is no attempt cap: a strategy that never finds the hidden
    /// combination never returns.
    pub fn play(&mut self) -> GameOutcome {
        self.play_with_limit(usize::MAX)
    }

    /// Reset and play until a win or `max_attempts` attempts
    pub fn play_with_limit(&mut self, max_attempts: usize) -> GameOutcome {
        self.reset();
        info!("Hidden combination: {}", self.hidden);

        while self.attempts < max_attempts && self.state != GameState::Won {
            self.attempt();
        }

        let won = self.state == GameState::Won;
        if won {
            info!(
                "Win after {} attempts, {} generations",
                self.attempts, self.generations
            );
            debug!("Combinations played: {}", self.played());
        } else {
            info!("Gave up after {} attempts", self.attempts);
        }

        GameOutcome {
            won,
            attempts: self.attempts,
            generations: self.generations,
            history: self.history.clone(),
        }
    }

    fn played(&self) -> String {
        self.history
            .iter()
            .map(|(guess, score)| format!("{guess} {score}"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    #[must_use]
    pub const fn colors(&self) -> usize {
        self.colors
    }

    #[must_use]
    pub const fn hidden(&self) -> &Combination {
        &self.hidden
    }

    #[must_use]
    pub fn history(&self) -> &[(Combination, Score)] {
        &self.history
    }

    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    #[must_use]
    pub const fn generations(&self) -> usize {
        self.generations
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }
}

fn check_hidden(hidden: &Combination, colors: usize, pegs: usize) -> Result<(), ConfigError> {
    if hidden.is_empty() {
        return Err(ConfigError::EmptyCombination);
    }
    if hidden.len() != pegs {
        return Err(ConfigError::LengthMismatch {
            expected: pegs,
            actual: hidden.len(),
        });
    }
    Combination::space_size(colors, pegs)?;
    hidden.check_colors(colors)
}
