//! Utilities for collecting game statistics and testing the board and bot implementations.
use std::collections::{HashMap, HashSet};

use internal_iterator::InternalIterator;

use crate::ai::Bot;
use crate::board::Board;

/// The number of move sequences of length `depth` starting from `board`, including duplicates.
/// Sequences that end the game early are not counted. See <https://www.chessprogramming.org/Perft>.
pub fn perft(board: &Board, depth: u32) -> u64 {
    let mut map = HashMap::default();
    perft_recurse(&mut map, board.clone(), depth)
}

fn perft_recurse(map: &mut HashMap<(Board, u32), u64>, board: Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    if board.is_done() {
        return 0;
    }

    // we need keys (B, depth) because otherwise we risk miscounting if the same board is encountered at different depths
    let key = (board, depth);
    if let Some(&p) = map.get(&key) {
        return p;
    }

    let board = &key.0;
    let player = board.next_player();

    let mut p = 0;
    board.available_moves().for_each(|mv| {
        let mut child = board.clone();
        // mv is an available move, so this can't fail
        let _ = child.place(mv, player);
        p += perft_recurse(map, child, depth - 1);
    });

    map.insert(key, p);
    p
}

/// Structure returned by [`average_game_stats`].
#[derive(Debug)]
pub struct GameStats {
    pub game_length: f32,
    pub available_moves: f32,
}

/// Return `GameStats` estimated from `n` games starting from `start` where both sides are played by `bot`.
pub fn average_game_stats(start: &Board, mut bot: impl Bot, n: u64) -> GameStats {
    let mut total_moves = 0;
    let mut total_positions = 0;

    for _ in 0..n {
        let mut board = start.clone();
        while !board.is_done() {
            total_moves += board.available_moves().count();
            total_positions += 1;

            let player = board.next_player();
            let mv = bot.select_move(&board, player);
            let placed = board.place(mv, player);
            assert!(placed.is_ok(), "Bot {:?} played occupied cell {}", bot, mv);
        }
    }

    GameStats {
        game_length: total_positions as f32 / n as f32,
        available_moves: total_moves as f32 / total_positions as f32,
    }
}

/// Generate the set of all possible boards reachable from the given board with alternating play,
/// in the order they are first encountered.
pub fn all_possible_boards(start: &Board, include_done: bool) -> Vec<Board> {
    let mut set = HashSet::new();
    let mut result = vec![];
    all_possible_boards_impl(start, include_done, &mut result, &mut set);
    result
}

fn all_possible_boards_impl(start: &Board, include_done: bool, result: &mut Vec<Board>, set: &mut HashSet<Board>) {
    if !include_done && start.is_done() {
        return;
    }
    if !set.insert(start.clone()) {
        return;
    }
    result.push(start.clone());
    if start.is_done() {
        return;
    }

    let player = start.next_player();
    start.available_moves().for_each(|mv| {
        let mut child = start.clone();
        let _ = child.place(mv, player);
        all_possible_boards_impl(&child, include_done, result, set)
    })
}
