//! Rule-based CPU opponent.
//!
//! A fixed priority list rather than a search: finish a line, block the
//! opponent's line, take the center, then a random corner, then a random
//! side. Randomness only breaks ties inside the corner and side groups, so
//! the kind of move is fully determined by the board.

use super::rules::WINNING_LINES;
use super::{Board, Mark, Position, Square};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Finds the empty square completing a line where `mark` already holds two.
///
/// Lines are scanned in [`WINNING_LINES`] order.
#[instrument(skip(board))]
pub fn find_critical_move(board: &Board, mark: Mark) -> Option<Position> {
    WINNING_LINES.iter().find_map(|line| {
        let owned = line
            .iter()
            .filter(|pos| board.get(**pos) == Square::Occupied(mark))
            .count();
        let mut empty = line.iter().copied().filter(|pos| board.is_empty(*pos));
        match (owned, empty.next(), empty.next()) {
            (2, Some(pos), None) => Some(pos),
            _ => None,
        }
    })
}

fn pick_random<R: Rng + ?Sized>(
    board: &Board,
    group: &[Position],
    rng: &mut R,
) -> Option<Position> {
    let open: Vec<Position> = group
        .iter()
        .copied()
        .filter(|pos| board.is_empty(*pos))
        .collect();
    open.choose(rng).copied()
}

/// Picks the square the CPU playing `cpu` will take.
///
/// Returns `None` only when the board is full.
#[instrument(skip(board, rng))]
pub fn pick_move<R: Rng + ?Sized>(board: &Board, cpu: Mark, rng: &mut R) -> Option<Position> {
    let lowest = *Position::valid_moves(board).first()?;

    if let Some(pos) = find_critical_move(board, cpu) {
        debug!(position = %pos, "Finishing line");
        return Some(pos);
    }

    if let Some(pos) = find_critical_move(board, cpu.opponent()) {
        debug!(position = %pos, "Blocking opponent");
        return Some(pos);
    }

    if board.is_empty(Position::Center) {
        return Some(Position::Center);
    }

    if let Some(pos) = pick_random(board, &Position::CORNERS, rng) {
        debug!(position = %pos, "Taking corner");
        return Some(pos);
    }

    if let Some(pos) = pick_random(board, &Position::SIDES, rng) {
        debug!(position = %pos, "Taking side");
        return Some(pos);
    }

    Some(lowest)
}
