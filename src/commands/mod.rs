//! Command implementations

pub mod benchmark;
pub mod play;
pub mod solve;
pub mod statistics;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use play::{PlayConfig, run_play};
pub use solve::{SolveConfig, SolveResult, SolveStep, solve_secret};
pub use statistics::{GameTally, RunningStatistics, Statistics};
