//! Round engine for tic-tac-toe.
//!
//! [`GameEngine`] owns the board, the turn marker and the score board.
//! Presentation code drives it with [`GameEngine::apply_move`] and
//! [`GameEngine::reset_round`] and renders from its read accessors.

use super::rules;
use super::{Board, Outcome, Player, Position, ScoreBoard, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe engine spanning any number of rounds.
///
/// Rejected moves (occupied square, finished round, index out of range)
/// are no-ops: the engine state is left alone and the current
/// [`Outcome`] is returned.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    board: Board,
    turn: Player,
    outcome: Outcome,
    scores: ScoreBoard,
}

/// Owned copy of everything a renderer needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// The board.
    pub board: Board,
    /// Player to move next.
    pub turn: Player,
    /// Outcome of the current round.
    pub outcome: Outcome,
    /// Scores across rounds.
    pub scores: ScoreBoard,
}

impl GameEngine {
    /// Creates an engine with an empty board, X to move and zero scores.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Places the current player's mark at a raw board index (0-8).
    ///
    /// Indices outside 0-8 are rejected like any other illegal move.
    #[instrument(skip(self), fields(player = %self.turn))]
    pub fn apply_move(&mut self, index: usize) -> Outcome {
        match Position::from_index(index) {
            Some(pos) => self.play(pos),
            None => {
                warn!(index, "Ignoring move outside the board");
                self.outcome
            }
        }
    }

    /// Places the current player's mark at `pos`.
    #[instrument(skip(self), fields(player = %self.turn))]
    pub fn play(&mut self, pos: Position) -> Outcome {
        if self.outcome.is_terminal() {
            debug!(outcome = %self.outcome, "Round is over, ignoring move");
            return self.outcome;
        }

        if !self.board.is_empty(pos) {
            debug!("Square is already occupied, ignoring move");
            return self.outcome;
        }

        let player = self.turn;
        self.board.set(pos, Square::Occupied(player));

        if let Some(winner) = rules::check_winner(&self.board) {
            self.finish(Outcome::Win(winner));
        } else if rules::is_draw(&self.board) {
            self.finish(Outcome::Draw);
        } else {
            self.turn = player.opponent();
        }

        debug!(outcome = %self.outcome, next = %self.turn, "Move applied");
        self.outcome
    }

    /// Ends the round and counts it exactly once.
    fn finish(&mut self, outcome: Outcome) {
        self.outcome = outcome;
        self.scores.record(outcome);
        info!(%outcome, scores = %self.scores, "Round finished");
    }

    /// True iff any of the eight lines holds three identical marks.
    pub fn check_win(&self) -> bool {
        rules::has_winner(&self.board)
    }

    /// True iff the board is full and holds no winning line.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(&self.board)
    }

    /// Starts a new round: empty board, X to move. Scores are kept.
    #[instrument(skip(self))]
    pub fn reset_round(&mut self) {
        self.board.clear();
        self.turn = Player::X;
        self.outcome = Outcome::InProgress;
        info!(scores = %self.scores, "New round");
    }

    /// Player to move next.
    pub fn current_turn(&self) -> Player {
        self.turn
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Outcome of the current round.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Scores across all rounds played on this engine.
    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    /// True while moves are accepted.
    pub fn is_accepting_moves(&self) -> bool {
        !self.outcome.is_terminal()
    }

    /// Copies the full engine state.
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            board: self.board.clone(),
            turn: self.turn,
            outcome: self.outcome,
            scores: self.scores,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine_state() {
        let engine = GameEngine::new();
        assert_eq!(engine.current_turn(), Player::X);
        assert_eq!(engine.outcome(), Outcome::InProgress);
        assert_eq!(engine.board(), &Board::new());
        assert_eq!(engine.scores(), &ScoreBoard::new());
        assert!(engine.is_accepting_moves());
    }

    #[test]
    fn test_move_flips_turn() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.apply_move(4), Outcome::InProgress);
        assert_eq!(engine.board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(engine.current_turn(), Player::O);
    }

    #[test]
    fn test_winning_move_keeps_turn_on_winner() {
        let mut engine = GameEngine::new();
        for index in [0, 3, 1, 4] {
            engine.apply_move(index);
        }
        assert_eq!(engine.apply_move(2), Outcome::Win(Player::X));
        assert_eq!(engine.current_turn(), Player::X);
        assert!(engine.check_win());
        assert!(!engine.is_draw());
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut engine = GameEngine::new();
        engine.apply_move(0);
        let before = engine.snapshot();
        assert_eq!(engine.apply_move(9), Outcome::InProgress);
        assert_eq!(engine.apply_move(usize::MAX), Outcome::InProgress);
        assert_eq!(engine.snapshot(), before);
    }
}
