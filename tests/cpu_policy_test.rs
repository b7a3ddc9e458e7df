//! Tests for the CPU policy against random human play.

use grid_clash::{Board, Game, Mark, Mode, Position, Square, find_critical_move, pick_move};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_cpu_takes_wins_and_blocks_in_live_games() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut game = Game::with_mode(Mode::Solo);

    for _ in 0..100 {
        while !game.outcome().is_over() {
            if game.awaiting_cpu() {
                let board = game.board().clone();
                let win = find_critical_move(&board, Mark::O);
                let block = find_critical_move(&board, Mark::X);

                let action = game.apply_cpu_move(&mut rng).expect("CPU move on live board");
                assert_eq!(action.mark, Mark::O);
                if let Some(pos) = win {
                    assert_eq!(action.position, pos);
                    assert_eq!(game.outcome().winner(), Some(Mark::O));
                } else if let Some(pos) = block {
                    assert_eq!(action.position, pos);
                } else if board.is_empty(Position::Center) {
                    assert_eq!(action.position, Position::Center);
                }
            } else {
                let open = Position::valid_moves(game.board());
                let pick = *open.choose(&mut rng).expect("open square");
                game.apply_move(pick.to_index()).expect("legal human move");
            }
        }
        game.next_round();
    }

    assert!(game.scores().get(Mark::O) > 0);
}

#[test]
fn test_same_seed_same_choice() {
    let board = Game::new().board().clone();
    let first = pick_move(&board, Mark::O, &mut ChaCha8Rng::seed_from_u64(5));
    let second = pick_move(&board, Mark::O, &mut ChaCha8Rng::seed_from_u64(5));
    assert_eq!(first, Some(Position::Center));
    assert_eq!(first, second);
}

#[test]
fn test_policy_works_for_either_mark() {
    let mut game = Game::new();
    for index in [0, 4, 1] {
        game.apply_move(index).unwrap();
    }
    // X threatens the top row; a CPU playing O must block at 2.
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert_eq!(
        pick_move(game.board(), Mark::O, &mut rng),
        Some(Position::TopRight)
    );
    // A CPU playing X would finish the same row.
    assert_eq!(
        pick_move(game.board(), Mark::X, &mut rng),
        Some(Position::TopRight)
    );
}

#[test]
fn test_own_pair_beats_block_and_center() {
    let mut squares = [Square::Empty; 9];
    squares[0] = Square::Occupied(Mark::O);
    squares[1] = Square::Occupied(Mark::O);
    squares[3] = Square::Occupied(Mark::X);
    squares[5] = Square::Occupied(Mark::X);
    let board = Board::from_squares(squares);

    // Center is open and X threatens the middle row through it.
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert_eq!(pick_move(&board, Mark::O, &mut rng), Some(Position::TopRight));
}
