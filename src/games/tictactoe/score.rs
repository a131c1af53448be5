//! Cumulative score across rounds.

use super::{Outcome, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Win and draw counters for one engine lifetime.
///
/// Counters only ever grow; a fresh engine starts from zero.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Getters,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("X Wins: {} | O Wins: {} | Draws: {}", x_wins, o_wins, draws)]
pub struct ScoreBoard {
    /// Rounds won by X.
    #[getter(copy)]
    x_wins: u32,
    /// Rounds won by O.
    #[getter(copy)]
    o_wins: u32,
    /// Rounds ending in a draw.
    #[getter(copy)]
    draws: u32,
}

impl ScoreBoard {
    /// Creates a zeroed score board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total finished rounds.
    pub fn rounds(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    /// Counts a terminal outcome. `InProgress` is ignored.
    pub(crate) fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Player::X) => self.x_wins += 1,
            Outcome::Win(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => return,
        }
        debug!(%outcome, score = %self, "Score updated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let score = ScoreBoard::new();
        assert_eq!(score.rounds(), 0);
        assert_eq!(score.to_string(), "X Wins: 0 | O Wins: 0 | Draws: 0");
    }

    #[test]
    fn test_record_each_outcome() {
        let mut score = ScoreBoard::new();
        score.record(Outcome::Win(Player::X));
        score.record(Outcome::Win(Player::O));
        score.record(Outcome::Win(Player::O));
        score.record(Outcome::Draw);
        assert_eq!(score.x_wins(), 1);
        assert_eq!(score.o_wins(), 2);
        assert_eq!(score.draws(), 1);
        assert_eq!(score.to_string(), "X Wins: 1 | O Wins: 2 | Draws: 1");
    }

    #[test]
    fn test_in_progress_is_not_counted() {
        let mut score = ScoreBoard::new();
        score.record(Outcome::InProgress);
        assert_eq!(score, ScoreBoard::new());
    }
}
