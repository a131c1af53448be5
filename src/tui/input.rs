//! Keyboard mapping for the terminal front end.

use crate::games::tictactoe::Position;
use crossterm::event::KeyCode;

/// Cursor step on the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Mark the given square.
    Place(Position),
    /// Mark the square under the cursor.
    PlaceAtCursor,
    /// Move the cursor.
    MoveCursor(CursorMove),
    /// Start a new round.
    ResetRound,
    /// Switch between light and dark.
    ToggleTheme,
    /// Leave the app.
    Quit,
}

/// Maps a key to an action; unbound keys yield `None`.
pub fn action_for(key: KeyCode) -> Option<Action> {
    let action = match key {
        KeyCode::Char(c) if c.is_ascii_digit() => Action::Place(Position::from_key(c)?),
        KeyCode::Enter | KeyCode::Char(' ') => Action::PlaceAtCursor,
        KeyCode::Up | KeyCode::Char('k') => Action::MoveCursor(CursorMove::Up),
        KeyCode::Down | KeyCode::Char('j') => Action::MoveCursor(CursorMove::Down),
        KeyCode::Left | KeyCode::Char('h') => Action::MoveCursor(CursorMove::Left),
        KeyCode::Right | KeyCode::Char('l') => Action::MoveCursor(CursorMove::Right),
        KeyCode::Char('r') | KeyCode::Char('R') => Action::ResetRound,
        KeyCode::Char('t') | KeyCode::Char('T') => Action::ToggleTheme,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}

/// Moves the cursor one step, stopping at the board edge.
pub fn move_cursor(cursor: Position, step: CursorMove) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match step {
        CursorMove::Up => (row.saturating_sub(1), col),
        CursorMove::Down => ((row + 1).min(2), col),
        CursorMove::Left => (row, col.saturating_sub(1)),
        CursorMove::Right => (row, (col + 1).min(2)),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_keys_map_to_squares() {
        assert_eq!(action_for(KeyCode::Char('1')), Some(Action::Place(Position::TopLeft)));
        assert_eq!(action_for(KeyCode::Char('9')), Some(Action::Place(Position::BottomRight)));
        assert_eq!(action_for(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_command_keys() {
        assert_eq!(action_for(KeyCode::Char('r')), Some(Action::ResetRound));
        assert_eq!(action_for(KeyCode::Char('t')), Some(Action::ToggleTheme));
        assert_eq!(action_for(KeyCode::Esc), Some(Action::Quit));
        assert_eq!(action_for(KeyCode::Enter), Some(Action::PlaceAtCursor));
        assert_eq!(action_for(KeyCode::Tab), None);
    }

    #[test]
    fn test_cursor_moves_within_grid() {
        assert_eq!(move_cursor(Position::Center, CursorMove::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, CursorMove::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::Center, CursorMove::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, CursorMove::Right), Position::MiddleRight);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, CursorMove::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, CursorMove::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, CursorMove::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, CursorMove::Right), Position::BottomRight);
    }
}
