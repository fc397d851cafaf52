//! Game orchestration and configuration

mod config;
mod session;

pub use config::{GameConfig, MAX_COLORS};
pub use session::{Game, GameOutcome, GameState};
