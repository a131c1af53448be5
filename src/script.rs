//! Scripted play: feed a list of moves and resets to an engine.

use crate::games::tictactoe::{GameEngine, Outcome, Position, PositionError};
use derive_more::{Display, Error};
use std::str::FromStr;
use tracing::{debug, instrument};

/// One step of a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStep {
    /// Current player marks a square.
    Move(Position),
    /// Start a new round, keeping scores.
    Reset,
}

impl FromStr for ScriptStep {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "r" | "reset" => Ok(ScriptStep::Reset),
            _ => s.parse().map(ScriptStep::Move),
        }
    }
}

/// A script token that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Bad script token #{} ({:?}): {}", index + 1, token, source)]
pub struct ScriptError {
    /// Zero-based token index.
    pub index: usize,
    /// The offending token.
    pub token: String,
    /// Why it was rejected.
    pub source: PositionError,
}

/// Parses every token, failing on the first bad one.
#[instrument(skip_all, fields(tokens = tokens.len()))]
pub fn parse_script<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<ScriptStep>, ScriptError> {
    tokens
        .iter()
        .enumerate()
        .map(|(index, token)| {
            let token = token.as_ref();
            token.parse().map_err(|source| ScriptError {
                index,
                token: token.to_string(),
                source,
            })
        })
        .collect()
}

/// Runs steps against `engine` and returns the final outcome.
///
/// Illegal moves are ignored by the engine, exactly as in interactive play.
#[instrument(skip_all, fields(steps = steps.len()))]
pub fn run_script(engine: &mut GameEngine, steps: &[ScriptStep]) -> Outcome {
    for step in steps {
        match step {
            ScriptStep::Move(pos) => {
                let outcome = engine.play(*pos);
                debug!(position = %pos, %outcome, "Script move");
            }
            ScriptStep::Reset => engine.reset_round(),
        }
    }
    engine.outcome()
}
