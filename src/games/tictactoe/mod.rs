//! Tic-tac-toe: board types, rules and the round engine.

mod engine;
mod outcome;
mod position;
pub mod rules;
mod score;
mod types;

pub use engine::{EngineSnapshot, GameEngine};
pub use outcome::Outcome;
pub use position::{Position, PositionError};
pub use score::ScoreBoard;
pub use types::{Board, Player, Square};

/// Alias matching the turn terminology used by renderers.
pub type Turn = Player;
