//! Tic-tac-toe: types, rules, turn engine and CPU opponent.

mod action;
pub mod cpu;
mod game;
mod mode;
mod position;
pub mod rules;
mod status;
mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use mode::Mode;
pub use position::Position;
pub use rules::{Line, RoundOutcome, WINNING_LINES};
pub use status::{GameSnapshot, Status};
pub use types::{Board, Mark, Scores, Square};
