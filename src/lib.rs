//! Grid Clash - tic-tac-toe with a running score.
//!
//! Two modes: a local duel between two people sharing the board, and a solo
//! game against a rule-based CPU.
//!
//! # Architecture
//!
//! - **Game**: pure turn engine (board, turn, scores, mode) and status derivation
//! - **CPU**: fixed-priority move policy with an injected RNG
//! - **Session**: async shell that schedules the delayed CPU reply and
//!   notifies the front-end of every change
//! - **TUI**: ratatui front-end that renders snapshots and forwards keys
//!
//! # Example
//!
//! ```
//! use grid_clash::{Game, Mark};
//!
//! let mut game = Game::new();
//! for index in [0, 3, 1, 4, 2] {
//!     game.apply_move(index).unwrap();
//! }
//! assert_eq!(game.scores().get(Mark::X), 1);
//! assert_eq!(game.status().to_string(), "Player X wins!");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod session;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Session management
pub use session::{GameEvent, GameSession};

// Crate-level exports - Terminal front-end
pub use tui::{Intent, intent, move_cursor, run_tui};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Game, GameSnapshot, Line, Mark, Mode, Move, MoveError, Position, RoundOutcome, Scores,
    Square, Status, WINNING_LINES,
};

// Crate-level exports - Rules and CPU policy
pub use games::tictactoe::cpu::{find_critical_move, pick_move};
pub use games::tictactoe::rules::{check_winner, evaluate, is_draw, is_full};
