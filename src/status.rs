//! Human-readable status text for renderers.

use crate::games::tictactoe::{GameEngine, Outcome, Player};

/// Status line for the current round.
///
/// `turn` is only consulted while the round is in progress.
pub fn status_message(outcome: Outcome, turn: Player) -> String {
    if let Some(player) = outcome.winner() {
        format!("Player {} wins!", player)
    } else if outcome.is_draw() {
        "It's a draw!".to_string()
    } else {
        format!("Player {}'s turn", turn)
    }
}

/// Plain-text board, status line and scoreboard.
pub fn report(engine: &GameEngine) -> String {
    format!(
        "{}\n\n{}\n{}",
        engine.board().display(),
        status_message(engine.outcome(), engine.current_turn()),
        engine.scores()
    )
}
