//! Key handling: cursor movement and key-to-command mapping.

use crate::games::tictactoe::{Mode, Position};
use crossterm::event::KeyCode;

/// What a key press asks the front-end to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Play the given cell.
    Select(Position),
    /// Move the cursor to the given cell.
    MoveCursor(Position),
    /// Clear the board, keep scores.
    NextRound,
    /// Clear the board and scores.
    ResetScores,
    /// Switch to the other mode.
    ToggleMode,
    /// Switch to a specific mode.
    SetMode(Mode),
    /// Leave the game.
    Quit,
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);

    let (row, col) = match key {
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        _ => (row, col),
    };

    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Maps a key press to an [`Intent`], given the cursor position.
pub fn intent(key: KeyCode, cursor: Position) -> Option<Intent> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Intent::Quit),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Intent::Select(cursor)),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map(Intent::Select),
        KeyCode::Char('n') => Some(Intent::NextRound),
        KeyCode::Char('r') => Some(Intent::ResetScores),
        KeyCode::Char('m') => Some(Intent::ToggleMode),
        KeyCode::Char('d') => Some(Intent::SetMode(Mode::Duo)),
        KeyCode::Char('s') => Some(Intent::SetMode(Mode::Solo)),
        KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
            Some(Intent::MoveCursor(move_cursor(cursor, key)))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
    }

    #[test]
    fn test_digits_are_one_based() {
        assert_eq!(
            intent(KeyCode::Char('1'), Position::Center),
            Some(Intent::Select(Position::TopLeft))
        );
        assert_eq!(
            intent(KeyCode::Char('9'), Position::Center),
            Some(Intent::Select(Position::BottomRight))
        );
        assert_eq!(intent(KeyCode::Char('0'), Position::Center), None);
    }

    #[test]
    fn test_enter_selects_cursor() {
        assert_eq!(
            intent(KeyCode::Enter, Position::BottomLeft),
            Some(Intent::Select(Position::BottomLeft))
        );
    }

    #[test]
    fn test_command_keys() {
        assert_eq!(intent(KeyCode::Char('n'), Position::Center), Some(Intent::NextRound));
        assert_eq!(intent(KeyCode::Char('r'), Position::Center), Some(Intent::ResetScores));
        assert_eq!(
            intent(KeyCode::Char('s'), Position::Center),
            Some(Intent::SetMode(Mode::Solo))
        );
        assert_eq!(intent(KeyCode::Esc, Position::Center), Some(Intent::Quit));
    }
}
