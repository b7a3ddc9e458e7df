//! Presentation-facing status line and state snapshot.

use super::{Board, Mark, Mode, Scores};
use serde::{Deserialize, Serialize};

/// What the status line should say.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// A mark completed a line.
    Won {
        /// The winning mark.
        mark: Mark,
        /// Mode the round was played in.
        mode: Mode,
    },
    /// Board filled without a winner.
    Draw,
    /// Solo mode, waiting on the delayed CPU turn.
    CpuPlanning,
    /// A human is to move.
    ToMove {
        /// The mark to move.
        mark: Mark,
        /// Current mode.
        mode: Mode,
    },
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Won {
                mark: Mark::X,
                mode: Mode::Solo,
            } => write!(f, "You win this round!"),
            Status::Won {
                mark: Mark::O,
                mode: Mode::Solo,
            } => write!(f, "CPU claims the round!"),
            Status::Won { mark, .. } => write!(f, "Player {} wins!", mark),
            Status::Draw => write!(f, "No moves left. It is a draw."),
            Status::CpuPlanning => write!(f, "CPU is planning its move..."),
            Status::ToMove {
                mark: Mark::X,
                mode: Mode::Solo,
            } => write!(f, "You to move"),
            Status::ToMove { mark, .. } => write!(f, "Player {} to move", mark),
        }
    }
}

/// Read-only copy of everything a renderer needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// The board.
    pub board: Board,
    /// Mark to move.
    pub turn: Mark,
    /// Running scores.
    pub scores: Scores,
    /// Current mode.
    pub mode: Mode,
    /// Winner of the round, if any.
    pub winner: Option<Mark>,
    /// Indices of the completed line, if any.
    pub winning_line: Option<[usize; 3]>,
    /// Board full with no winner.
    pub is_draw: bool,
    /// Human-readable status line.
    pub status_message: String,
    /// Scoreboard label for X.
    pub x_label: String,
    /// Scoreboard label for O.
    pub o_label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solo_phrasing() {
        let won = |mark| Status::Won {
            mark,
            mode: Mode::Solo,
        };
        assert_eq!(won(Mark::X).to_string(), "You win this round!");
        assert_eq!(won(Mark::O).to_string(), "CPU claims the round!");
        let to_move = Status::ToMove {
            mark: Mark::X,
            mode: Mode::Solo,
        };
        assert_eq!(to_move.to_string(), "You to move");
    }

    #[test]
    fn test_duo_phrasing() {
        let won = Status::Won {
            mark: Mark::O,
            mode: Mode::Duo,
        };
        assert_eq!(won.to_string(), "Player O wins!");
        let to_move = Status::ToMove {
            mark: Mark::O,
            mode: Mode::Duo,
        };
        assert_eq!(to_move.to_string(), "Player O to move");
    }
}
