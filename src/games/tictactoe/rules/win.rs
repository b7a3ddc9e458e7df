//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A line of three positions that wins when monochrome.
pub type Line = [Position; 3];

/// Winning lines in evaluation order: rows, columns, diagonals.
pub const WINNING_LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Outcome of a round, derived from the board alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// A mark completed the given line.
    Win {
        /// The winning mark.
        mark: Mark,
        /// The completed line.
        line: Line,
    },
    /// Every square is filled and nobody won.
    Draw,
    /// Moves remain.
    InProgress,
}

impl RoundOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            RoundOutcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns true once the round is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, RoundOutcome::InProgress)
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the first completed line in [`WINNING_LINES`] order.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Mark, Line)> {
    WINNING_LINES.into_iter().find_map(|line @ [a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(mark) if sq == board.get(b) && sq == board.get(c) => {
                Some((mark, line))
            }
            _ => None,
        }
    })
}

/// Evaluates the board into a [`RoundOutcome`].
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> RoundOutcome {
    if let Some((mark, line)) = check_winner(board) {
        RoundOutcome::Win { mark, line }
    } else if super::draw::is_full(board) {
        RoundOutcome::Draw
    } else {
        RoundOutcome::InProgress
    }
}
