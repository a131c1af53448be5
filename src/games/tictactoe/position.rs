//! Named board positions for tic-tac-toe moves.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::instrument;

/// A position on the tic-tac-toe board (index 0-8, row-major).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

/// Error converting user input or a raw index into a [`Position`].
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum PositionError {
    /// Index outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),
    /// Text that is neither a key (1-9) nor a position label.
    #[display("Unrecognized position: {:?}", _0)]
    Unrecognized(#[error(not(source))] String),
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Row of this position (0-2, top to bottom).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2, left to right).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from a 1-based key as printed on an empty square.
    pub fn from_key(key: char) -> Option<Self> {
        key.to_digit(10)
            .filter(|digit| (1..=9).contains(digit))
            .and_then(|digit| Self::from_index(digit as usize - 1))
    }
}

impl TryFrom<usize> for Position {
    type Error = PositionError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or(PositionError::OutOfRange(index))
    }
}

impl FromStr for Position {
    type Err = PositionError;

    /// Parses a 1-based key (`"5"`) or a label (`"center"`, `"top-left"`,
    /// `"bottom_right"`), ignoring case and separators.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(key), None) = (chars.next(), chars.next())
            && let Some(pos) = Self::from_key(key)
        {
            return Ok(pos);
        }

        let wanted = normalize(trimmed);
        Position::iter()
            .find(|pos| normalize(pos.label()) == wanted)
            .ok_or_else(|| PositionError::Unrecognized(s.to_string()))
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_covers_all() {
        for (index, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.to_index(), index);
            assert_eq!(Position::try_from(index), Ok(*pos));
        }
    }

    #[test]
    fn test_try_from_out_of_range() {
        assert_eq!(Position::try_from(9), Err(PositionError::OutOfRange(9)));
        assert!(Position::try_from(usize::MAX).is_err());
    }

    #[test]
    fn test_row_and_col() {
        assert_eq!((Position::MiddleRight.row(), Position::MiddleRight.col()), (1, 2));
        assert_eq!((Position::BottomLeft.row(), Position::BottomLeft.col()), (2, 0));
    }

    #[test]
    fn test_from_key() {
        assert_eq!(Position::from_key('1'), Some(Position::TopLeft));
        assert_eq!(Position::from_key('9'), Some(Position::BottomRight));
        assert_eq!(Position::from_key('0'), None);
        assert_eq!(Position::from_key('x'), None);
    }

    #[test]
    fn test_parse_labels_exactly() {
        assert_eq!("center".parse::<Position>(), Ok(Position::Center));
        assert_eq!("Top-Center".parse::<Position>(), Ok(Position::TopCenter));
        assert_eq!("bottom_right".parse::<Position>(), Ok(Position::BottomRight));
        assert_eq!(" 5 ".parse::<Position>(), Ok(Position::Center));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            "10".parse::<Position>(),
            Err(PositionError::Unrecognized(_))
        ));
        assert!("corner".parse::<Position>().is_err());
    }
}
