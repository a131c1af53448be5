//! Colors for each [`Theme`].

use crate::games::tictactoe::Player;
use crate::theme::Theme;
use ratatui::style::Color;

/// Resolved colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Window background.
    pub background: Color,
    /// Title and status text.
    pub text: Color,
    /// Scoreboard text.
    pub score: Color,
    /// Background behind the grid lines.
    pub board: Color,
    /// Square background.
    pub cell: Color,
    /// Key hint on empty squares and grid lines.
    pub muted: Color,
    /// Mark color for X.
    pub mark_x: Color,
    /// Mark color for O.
    pub mark_o: Color,
}

impl Palette {
    /// Palette for `theme`.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::White,
                text: Color::Black,
                score: Color::Blue,
                board: Color::Gray,
                cell: Color::White,
                muted: Color::DarkGray,
                mark_x: Color::Red,
                mark_o: Color::Blue,
            },
            Theme::Dark => Self {
                background: Color::DarkGray,
                text: Color::White,
                score: Color::Rgb(255, 165, 0),
                board: Color::Black,
                cell: Color::Gray,
                muted: Color::Black,
                mark_x: Color::Red,
                mark_o: Color::Blue,
            },
        }
    }

    /// Mark color for `player`.
    pub fn mark(&self, player: Player) -> Color {
        match player {
            Player::X => self.mark_x,
            Player::O => self.mark_o,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_themes_differ() {
        let light = Palette::for_theme(Theme::Light);
        let dark = Palette::for_theme(Theme::Dark);
        assert_ne!(light.background, dark.background);
        assert_eq!(dark.score, Color::Rgb(255, 165, 0));
        assert_eq!(light.mark(Player::X), Color::Red);
        assert_eq!(light.mark(Player::O), Color::Blue);
    }
}
