//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. Shared by the state machine and the
//! CPU policy.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Line, RoundOutcome, WINNING_LINES, check_winner, evaluate};
