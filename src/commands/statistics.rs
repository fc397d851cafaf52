//! Summary statistics over played games

use crate::game::GameOutcome;
use std::collections::BTreeMap;

/// Statistical summary of a dataset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Population variance
    pub variance: f64,
    pub std_dev: f64,
}

/// Running sums from which [`Statistics`] are derived in constant memory
///
/// # Examples
/// ```
/// use mastermind_evo::commands::statistics::RunningStatistics;
///
/// let mut running = RunningStatistics::new();
/// for x in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     running.push(x);
/// }
/// let stats = running.summary().unwrap();
/// assert_eq!(stats.mean, 5.0);
/// assert_eq!(stats.std_dev, 2.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RunningStatistics {
    count: usize,
    sum: f64,
    sum_squares: f64,
    min: f64,
    max: f64,
}

impl RunningStatistics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, x: f64) {
        if self.count == 0 {
            self.min = x;
            self.max = x;
        } else {
            self.min = self.min.min(x);
            self.max = self.max.max(x);
        }
        self.count += 1;
        self.sum += x;
        self.sum_squares += x * x;
    }

    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Summary of every value pushed so far, `None` before the first
    #[must_use]
    pub fn summary(&self) -> Option<Statistics> {
        if self.count == 0 {
            return None;
        }

        let n = self.count as f64;
        let mean = self.sum / n;
        // Rounding can push a constant dataset slightly below zero
        let variance = (self.sum_squares / n - mean * mean).max(0.0);

        Some(Statistics {
            min: self.min,
            max: self.max,
            mean,
            variance,
            std_dev: variance.sqrt(),
        })
    }
}

/// Running statistics of every game played so far
#[derive(Debug, Clone, Default)]
pub struct GameTally {
    attempts: RunningStatistics,
    generations: RunningStatistics,
    /// Games per attempt count
    distribution: BTreeMap<usize, usize>,
    won: usize,
}

impl GameTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: &GameOutcome) {
        self.attempts.push(outcome.attempts as f64);
        self.generations.push(outcome.generations as f64);
        *self.distribution.entry(outcome.attempts).or_insert(0) += 1;
        if outcome.won {
            self.won += 1;
        }
    }

    #[must_use]
    pub const fn games(&self) -> usize {
        self.attempts.count()
    }

    #[must_use]
    pub const fn won(&self) -> usize {
        self.won
    }

    #[must_use]
    pub fn attempts(&self) -> Option<Statistics> {
        self.attempts.summary()
    }

    #[must_use]
    pub fn generations(&self) -> Option<Statistics> {
        self.generations.summary()
    }

    /// Number of games that took each attempt count, ascending
    #[must_use]
    pub fn distribution(&self) -> Vec<(usize, usize)> {
        self.distribution
            .iter()
            .map(|(&attempts, &count)| (attempts, count))
            .collect()
    }
}
