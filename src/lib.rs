//! Tic-tac-toe with score tracking across rounds.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns the board, turn and [`ScoreBoard`]
//! - **Rules**: pure win/draw checks in [`rules`]
//! - **TUI**: ratatui front end with a light/dark [`Theme`]
//! - **Script**: non-interactive play from a list of moves
//!
//! # Example
//!
//! ```
//! use tictactoe_rounds::{GameEngine, Outcome, Player};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 3, 1, 4] {
//!     engine.apply_move(index);
//! }
//! assert_eq!(engine.apply_move(2), Outcome::Win(Player::X));
//! assert_eq!(engine.scores().x_wins(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
pub mod logging;
mod script;
mod status;
mod theme;
pub mod tui;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, EngineSnapshot, GameEngine, Outcome, Player, Position, PositionError, ScoreBoard,
    Square, Turn, rules,
};

// Crate-level exports - Presentation helpers
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE};
pub use script::{ScriptError, ScriptStep, parse_script, run_script};
pub use status::{report, status_message};
pub use theme::Theme;
