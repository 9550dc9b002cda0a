use ttt_engine::ai::minimax::{best_move, search};
use ttt_engine::board::{Board, Outcome, Player};
use ttt_engine::coord::Coord;
use ttt_engine::eval::{score, WIN_SCORE};
use ttt_engine::util::game_stats::all_possible_boards;

#[test]
fn empty_board_is_draw() {
    let board = Board::new();
    let result = best_move(&board, Player::A);

    assert_eq!(result.value, 0);
    // every first move draws, so the first one in row-major order is kept
    assert_eq!(result.best_move, Some(Coord::from_rc(0, 0)));
    assert!(result.best_move.unwrap().is_corner());
    assert_eq!(board, Board::new(), "search must not modify the board");
}

#[test]
fn immediate_win() {
    let board: Board = "AA./BB./...".parse().unwrap();
    let result = best_move(&board, Player::A);
    assert_eq!(result.best_move, Some(Coord::from_rc(0, 2)));
    assert_eq!(result.value, WIN_SCORE);
}

#[test]
fn forced_block() {
    // B threatens (2, 2), every other move loses immediately
    let board: Board = ".A./A../BB.".parse().unwrap();
    assert_eq!(board.next_player(), Player::A);

    let result = best_move(&board, Player::A);
    assert_eq!(result.best_move, Some(Coord::from_rc(2, 2)));
    assert!(result.value >= 0);

    let mut scratch = board.clone();
    scratch.place(Coord::from_rc(0, 0), Player::A).unwrap();
    assert_eq!(search(&mut scratch, Player::A, Player::B), -WIN_SCORE);
}

#[test]
fn ties_broken_row_major() {
    // A can win at both (0, 2) and (2, 2), the earlier cell is picked
    let board: Board = "AA./BA./BB.".parse().unwrap();
    assert_eq!(board.next_player(), Player::A);

    let result = best_move(&board, Player::A);
    assert_eq!(result.best_move, Some(Coord::from_rc(0, 2)));
    assert_eq!(result.value, WIN_SCORE);
}

#[test]
fn no_depth_preference() {
    // A wins immediately at (2, 2), but (0, 2) creates a double threat that wins one move later
    // both are worth the same, so the earlier cell in row-major order is picked
    let board: Board = "AB./.AB/...".parse().unwrap();
    assert_eq!(board.next_player(), Player::A);

    let mut immediate = board.clone();
    immediate.place(Coord::from_rc(2, 2), Player::A).unwrap();
    assert_eq!(immediate.outcome(), Outcome::WonBy(Player::A));

    let mut delayed = board.clone();
    delayed.place(Coord::from_rc(0, 2), Player::A).unwrap();
    assert_eq!(delayed.outcome(), Outcome::InProgress);
    assert_eq!(search(&mut delayed, Player::A, Player::B), WIN_SCORE);

    let result = best_move(&board, Player::A);
    assert_eq!(result.value, WIN_SCORE);
    assert_eq!(result.best_move, Some(Coord::from_rc(0, 2)));
}

#[test]
fn lost_position_for_b() {
    // A threatens both (1, 1) and (2, 1), B can only block one of them
    let board: Board = "AB./B../A.A".parse().unwrap();
    assert_eq!(board.next_player(), Player::B);

    let result = best_move(&board, Player::B);
    assert_eq!(result.value, -WIN_SCORE);
    assert!(result.best_move.is_some());
}

#[test]
fn full_board_has_no_move() {
    let board: Board = "ABA/BAB/BAB".parse().unwrap();
    let result = best_move(&board, Player::A);
    assert_eq!(result.best_move, None);
    assert_eq!(result.value, 0);
}

#[test]
fn search_restores_board() {
    for board in all_possible_boards(&Board::new(), false).into_iter().step_by(97) {
        let mut scratch = board.clone();
        let player = board.next_player();
        search(&mut scratch, player, player);
        assert_eq!(scratch, board);
    }
}

#[test]
fn best_move_value_matches_children() {
    // the value of the best move is the best of all children, from every reachable position
    for board in all_possible_boards(&Board::new(), false) {
        if board.legal_moves().len() > 6 {
            continue;
        }

        let pov = board.next_player();
        let result = best_move(&board, pov);
        let best_move = result.best_move.unwrap();

        let child_values: Vec<i32> = board
            .legal_moves()
            .into_iter()
            .map(|mv| {
                let mut child = board.clone();
                child.place(mv, pov).unwrap();
                search(&mut child, pov, pov.other())
            })
            .collect();

        let max = *child_values.iter().max().unwrap();
        let first_max = board.legal_moves()[child_values.iter().position(|&v| v == max).unwrap()];

        assert_eq!(result.value, max, "{:?}", board);
        assert_eq!(best_move, first_max, "{:?}", board);
    }
}

/// Let `pov` play [best_move] and the opponent every possible move, asserting `pov` never loses.
fn assert_never_loses(board: &mut Board, pov: Player, turn: Player) -> usize {
    match board.outcome() {
        Outcome::InProgress => {}
        _ => {
            assert!(score(board, pov) >= 0, "{:?} lost on {:?}", pov, board);
            return 1;
        }
    }

    if turn == pov {
        let mv = best_move(board, pov).best_move.unwrap();
        board.place(mv, pov).unwrap();
        let leaves = assert_never_loses(board, pov, turn.other());
        board.undo(mv);
        leaves
    } else {
        let mut leaves = 0;
        for mv in board.legal_moves() {
            board.place(mv, turn).unwrap();
            leaves += assert_never_loses(board, pov, turn.other());
            board.undo(mv);
        }
        leaves
    }
}

#[test]
fn never_loses_moving_first() {
    let leaves = assert_never_loses(&mut Board::new(), Player::A, Player::A);
    assert!(leaves > 0);
}

#[test]
fn never_loses_moving_second() {
    let leaves = assert_never_loses(&mut Board::new(), Player::B, Player::A);
    assert!(leaves > 0);
}

#[test]
fn never_loses_from_drawn_positions() {
    // every reachable position after two moves is still a draw with best play
    let boards = all_possible_boards(&Board::new(), false);
    for board in boards.into_iter().filter(|b| b.legal_moves().len() == 7) {
        let pov = board.next_player();
        assert!(best_move(&board, pov).value >= 0, "{:?}", board);
        assert_never_loses(&mut board.clone(), pov, pov);
    }
}

/// The worst result `pov` can end up with when it keeps playing [best_move] and the opponent plays anything.
fn worst_continuation(board: &mut Board, pov: Player, turn: Player) -> i32 {
    if board.is_done() {
        return score(board, pov);
    }

    if turn == pov {
        let mv = best_move(board, pov).best_move.unwrap();
        board.place(mv, pov).unwrap();
        let value = worst_continuation(board, pov, turn.other());
        board.undo(mv);
        value
    } else {
        let mut worst = i32::MAX;
        for mv in board.legal_moves() {
            board.place(mv, turn).unwrap();
            worst = worst.min(worst_continuation(board, pov, turn.other()));
            board.undo(mv);
        }
        worst
    }
}

#[test]
fn best_move_value_holds_from_every_board() {
    let boards = all_possible_boards(&Board::new(), false);
    assert_eq!(boards.len(), 4520);

    for board in boards {
        let pov = board.next_player();
        let value = best_move(&board, pov).value;
        let worst = worst_continuation(&mut board.clone(), pov, pov);

        assert!(worst >= value, "{:?} can be forced to {} but was promised {}", board, worst, value);
    }
}

#[test]
fn self_play_is_draw() {
    let mut board = Board::new();
    let mut player = Player::A;

    while !board.is_done() {
        let mv = best_move(&board, player).best_move.unwrap();
        board.place(mv, player).unwrap();
        player = player.other();
    }

    assert_eq!(board.outcome(), Outcome::Draw);
}
