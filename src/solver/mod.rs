//! Code-breaking algorithms
//!
//! Feasibility filtering, entropy scoring, the evolutionary optimizer and
//! the strategies that combine them into guess proposals.

mod engine;
pub mod entropy;
pub mod feasibility;
pub mod fitness;
pub mod genetic;
pub mod strategy;

pub use engine::{SearchConfig, SearchEngine};
pub use fitness::EntropyReference;
pub use genetic::{EvolutionReport, Evolver, FitnessFunction, GeneticConfig, GenomeSpec};
pub use strategy::{RandomStrategy, Strategy, StrategyKind, StrategyType};
