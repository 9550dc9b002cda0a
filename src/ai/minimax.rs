//! Exhaustive minimax over the full game tree.
//!
//! The tree is small enough (at most 9! move sequences, fewer thanks to early wins) that no pruning
//! or caching is needed, so every value returned here is exact.
//! Scores are [WIN_SCORE](crate::eval::WIN_SCORE) based and do not depend on depth,
//! so a fast win and a slow win are worth the same and the earliest move in row-major order is picked.
use tracing::trace;

use crate::board::{Board, Player};
use crate::coord::Coord;
use crate::eval::score;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MinimaxResult {
    /// The value of the board from the POV of the maximizing player.
    pub value: i32,

    /// The best move to play, `None` if the board is full.
    pub best_move: Option<Coord>,
}

/// Find the best move for `pov`, assuming both players play optimally from here on.
/// Ties are broken by row-major order: the first move reaching the best value is kept.
pub fn best_move(board: &Board, pov: Player) -> MinimaxResult {
    // all searching happens on this copy, the caller's board is never touched
    let mut scratch = board.clone();
    let mut best: Option<(Coord, i32)> = None;

    for mv in Coord::all() {
        if !scratch.is_available_move(mv) {
            continue;
        }

        play(&mut scratch, mv, pov);
        let value = search(&mut scratch, pov, pov.other());
        scratch.undo(mv);

        if best.map_or(true, |(_, best_value)| value > best_value) {
            best = Some((mv, value));
        }
    }

    let result = match best {
        Some((mv, value)) => MinimaxResult {
            value,
            best_move: Some(mv),
        },
        None => MinimaxResult {
            value: score(board, pov),
            best_move: None,
        },
    };

    trace!(?board, ?pov, ?result, "minimax finished");
    result
}

/// The minimax value of `board` with `turn` to move, always from the POV of the top-level player `pov`.
///
/// The player to move maximizes if it is `pov` and minimizes otherwise.
/// `board` is modified during the search but restored before returning.
pub fn search(board: &mut Board, pov: Player, turn: Player) -> i32 {
    let terminal_score = score(board, pov);
    if terminal_score != 0 || board.is_full() {
        return terminal_score;
    }

    let maximizing = turn == pov;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for mv in Coord::all() {
        if !board.is_available_move(mv) {
            continue;
        }

        play(board, mv, turn);
        let value = search(board, pov, turn.other());
        board.undo(mv);

        best = if maximizing { best.max(value) } else { best.min(value) };
    }

    best
}

fn play(board: &mut Board, mv: Coord, player: Player) {
    let placed = board.place(mv, player);
    assert!(placed.is_ok(), "Search tried to play {} on occupied cell of {:?}", mv, board);
}
