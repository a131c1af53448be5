//! Application state and logic.

use super::input::{self, Action};
use crate::games::tictactoe::{GameEngine, Position};
use crate::status::status_message;
use crate::theme::Theme;
use crossterm::event::KeyCode;
use tracing::{debug, info, instrument};

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep reading input.
    Continue,
    /// Exit the app.
    Quit,
}

/// Main application state: the engine plus presentation-only bits.
#[derive(Debug, Clone)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    theme: Theme,
}

impl App {
    /// Creates a new application with a fresh engine.
    #[instrument]
    pub fn new(theme: Theme) -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Position::Center,
            theme,
        }
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Square under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Status line for the current round.
    pub fn status_message(&self) -> String {
        status_message(self.engine.outcome(), self.engine.current_turn())
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match input::action_for(key) {
            Some(action) => self.handle_action(action),
            None => Control::Continue,
        }
    }

    /// Applies one action.
    #[instrument(skip(self))]
    pub fn handle_action(&mut self, action: Action) -> Control {
        match action {
            Action::Place(pos) => {
                self.cursor = pos;
                self.place(pos);
            }
            Action::PlaceAtCursor => self.place(self.cursor),
            Action::MoveCursor(step) => {
                self.cursor = input::move_cursor(self.cursor, step);
            }
            Action::ResetRound => self.engine.reset_round(),
            Action::ToggleTheme => {
                self.theme = self.theme.toggle();
                info!(theme = %self.theme, "Theme toggled");
            }
            Action::Quit => return Control::Quit,
        }
        Control::Continue
    }

    fn place(&mut self, pos: Position) {
        let outcome = self.engine.play(pos);
        debug!(position = %pos, %outcome, "Move handled");
    }
}
