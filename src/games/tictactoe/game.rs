//! Turn engine for tic-tac-toe rounds.
//!
//! Owns the board, the mark to move, the running scores and the mode.
//! Winner, draw and status are never stored; they are derived from the
//! board on every read.

use super::action::{Move, MoveError};
use super::cpu;
use super::rules::{self, RoundOutcome};
use super::status::{GameSnapshot, Status};
use super::{Board, Mark, Mode, Position, Scores, Square};
use rand::Rng;
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game state machine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Game {
    board: Board,
    turn: Mark,
    scores: Scores,
    mode: Mode,
}

impl Game {
    /// Creates a new game in Duo mode.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new game in the given mode.
    #[instrument]
    pub fn with_mode(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the running scores.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Returns the current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Evaluates the current board.
    pub fn outcome(&self) -> RoundOutcome {
        rules::evaluate(&self.board)
    }

    /// True when the CPU owns the mark to move.
    pub fn is_cpu_turn(&self) -> bool {
        self.mode.cpu_mark() == Some(self.turn)
    }

    /// True when the round is live and the CPU should move next.
    pub fn awaiting_cpu(&self) -> bool {
        self.is_cpu_turn() && !self.outcome().is_over()
    }

    /// Places the mark to move at `index` (0-8) on behalf of a human.
    ///
    /// # Errors
    ///
    /// Returns the reason the request was ignored; state is unchanged.
    #[instrument(skip(self), fields(turn = %self.turn, mode = %self.mode))]
    pub fn apply_move(&mut self, index: usize) -> Result<Move, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;

        if self.outcome().is_over() {
            return Err(MoveError::RoundOver);
        }

        if self.is_cpu_turn() {
            return Err(MoveError::CpuTurn);
        }

        self.place(position)
    }

    /// Lets the CPU choose and play its move.
    ///
    /// Does nothing unless [`Game::awaiting_cpu`] holds. If the policy has no
    /// square to offer, the turn goes back to the human.
    #[instrument(skip(self, rng), fields(mode = %self.mode))]
    pub fn apply_cpu_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Move> {
        if !self.awaiting_cpu() {
            return None;
        }
        let cpu_mark = self.turn;

        let Some(position) = cpu::pick_move(&self.board, cpu_mark, rng) else {
            debug!("CPU found no square, handing turn back");
            self.turn = cpu_mark.opponent();
            return None;
        };

        match self.place(position) {
            Ok(action) => Some(action),
            Err(e) => {
                warn!(error = %e, position = %position, "CPU chose an unplayable square");
                None
            }
        }
    }

    /// Applies a validated placement, scoring a win in the same step.
    fn place(&mut self, position: Position) -> Result<Move, MoveError> {
        if !self.board.is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }

        let action = Move::new(self.turn, position);
        self.board.set(position, Square::Occupied(action.mark));

        if let Some((winner, line)) = rules::check_winner(&self.board) {
            self.scores.record_win(winner);
            info!(winner = %winner, ?line, "Round won");
        } else if rules::is_full(&self.board) {
            info!("Round drawn");
        }

        self.turn = self.turn.opponent();
        debug!(%action, "Move applied");
        Ok(action)
    }

    /// Clears the board for a new round. Scores are kept.
    #[instrument(skip(self))]
    pub fn next_round(&mut self) {
        info!("Starting next round");
        self.clear_board();
    }

    /// Clears the board and zeroes both scores.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        info!("Resetting scores");
        self.clear_board();
        self.scores = Scores::default();
    }

    /// Switches mode, discarding the board in play.
    ///
    /// Returns `false` (and changes nothing) if `mode` is already active.
    #[instrument(skip(self), fields(current = %self.mode))]
    pub fn set_mode(&mut self, mode: Mode) -> bool {
        if mode == self.mode {
            return false;
        }
        info!(%mode, "Switching mode");
        self.mode = mode;
        self.clear_board();
        true
    }

    fn clear_board(&mut self) {
        self.board = Board::new();
        self.turn = Mark::X;
    }

    /// Derives the status line for the current state.
    pub fn status(&self) -> Status {
        match self.outcome() {
            RoundOutcome::Win { mark, .. } => Status::Won {
                mark,
                mode: self.mode,
            },
            RoundOutcome::Draw => Status::Draw,
            RoundOutcome::InProgress if self.is_cpu_turn() => Status::CpuPlanning,
            RoundOutcome::InProgress => Status::ToMove {
                mark: self.turn,
                mode: self.mode,
            },
        }
    }

    /// Read-only view for the presentation layer.
    pub fn snapshot(&self) -> GameSnapshot {
        let outcome = self.outcome();
        let winning_line = match outcome {
            RoundOutcome::Win { line, .. } => Some(line.map(Position::to_index)),
            _ => None,
        };

        GameSnapshot {
            board: self.board.clone(),
            turn: self.turn,
            scores: self.scores,
            mode: self.mode,
            winner: outcome.winner(),
            winning_line,
            is_draw: outcome == RoundOutcome::Draw,
            status_message: self.status().to_string(),
            x_label: self.mode.label(Mark::X).to_string(),
            o_label: self.mode.label(Mark::O).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn play(game: &mut Game, moves: &[usize]) {
        for &index in moves {
            game.apply_move(index).expect("legal move");
        }
    }

    #[test]
    fn test_turn_alternates_after_each_move() {
        let mut game = Game::new();
        assert_eq!(game.turn(), Mark::X);
        game.apply_move(4).unwrap();
        assert_eq!(game.turn(), Mark::O);
        game.apply_move(0).unwrap();
        assert_eq!(game.turn(), Mark::X);
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let mut game = Game::new();
        assert_eq!(game.apply_move(9), Err(MoveError::OutOfBounds(9)));
        assert_eq!(game, Game::new());
    }

    #[test]
    fn test_win_scores_with_the_move() {
        let mut game = Game::new();
        play(&mut game, &[0, 3, 1, 4, 2]);
        assert_eq!(game.scores().get(Mark::X), 1);
        assert_eq!(game.status().to_string(), "Player X wins!");
        assert_eq!(game.apply_move(8), Err(MoveError::RoundOver));
    }

    #[test]
    fn test_solo_rejects_human_during_cpu_turn() {
        let mut game = Game::with_mode(Mode::Solo);
        game.apply_move(0).unwrap();
        assert!(game.awaiting_cpu());
        let before = game.clone();
        assert_eq!(game.apply_move(4), Err(MoveError::CpuTurn));
        assert_eq!(game, before);
        assert_eq!(game.status(), Status::CpuPlanning);
    }

    #[test]
    fn test_cpu_move_returns_turn_to_human() {
        let mut game = Game::with_mode(Mode::Solo);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        game.apply_move(0).unwrap();
        let action = game.apply_cpu_move(&mut rng).expect("cpu moves");
        assert_eq!(action, Move::new(Mark::O, Position::Center));
        assert_eq!(game.turn(), Mark::X);
        assert_eq!(game.apply_cpu_move(&mut rng), None);
    }

    #[test]
    fn test_cpu_never_moves_in_duo() {
        let mut game = Game::new();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        game.apply_move(0).unwrap();
        assert_eq!(game.apply_cpu_move(&mut rng), None);
        assert_eq!(game.board().filled(), 1);
    }

    #[test]
    fn test_set_mode_same_mode_is_noop() {
        let mut game = Game::new();
        game.apply_move(4).unwrap();
        assert!(!game.set_mode(Mode::Duo));
        assert_eq!(game.board().filled(), 1);
        assert!(game.set_mode(Mode::Solo));
        assert_eq!(game.board().filled(), 0);
        assert_eq!(game.turn(), Mark::X);
    }
}
