//! Terminal condition detection: lines, scores and outcomes.
use crate::board::{Board, Outcome, Player};
use crate::coord::Coord;

/// The magnitude of a won or lost board. Does not depend on how many moves it took to get there.
pub const WIN_SCORE: i32 = 10;

/// The 8 ways to get three in a row: rows, columns and both diagonals.
pub const LINES: [[Coord; 3]; 8] = [
    [Coord::from_rc(0, 0), Coord::from_rc(0, 1), Coord::from_rc(0, 2)],
    [Coord::from_rc(1, 0), Coord::from_rc(1, 1), Coord::from_rc(1, 2)],
    [Coord::from_rc(2, 0), Coord::from_rc(2, 1), Coord::from_rc(2, 2)],
    [Coord::from_rc(0, 0), Coord::from_rc(1, 0), Coord::from_rc(2, 0)],
    [Coord::from_rc(0, 1), Coord::from_rc(1, 1), Coord::from_rc(2, 1)],
    [Coord::from_rc(0, 2), Coord::from_rc(1, 2), Coord::from_rc(2, 2)],
    [Coord::from_rc(0, 0), Coord::from_rc(1, 1), Coord::from_rc(2, 2)],
    [Coord::from_rc(0, 2), Coord::from_rc(1, 1), Coord::from_rc(2, 0)],
];

/// Whether `player` fully owns any of the [LINES].
pub fn has_line(board: &Board, player: Player) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&coord| board.tile(coord) == Some(player)))
}

/// `+WIN_SCORE` if `pov` has a line, `-WIN_SCORE` if the opponent has one and `0` otherwise.
///
/// Non-terminal boards also score `0`, combine with [has_line] and [Board::is_full] to detect the end of a game.
pub fn score(board: &Board, pov: Player) -> i32 {
    if has_line(board, pov) {
        WIN_SCORE
    } else if has_line(board, pov.other()) {
        -WIN_SCORE
    } else {
        0
    }
}

/// The current status of `board`, this is what decides when a round ends.
///
/// Alternating play guarantees that at most one player can have a line, this is not checked here.
pub fn classify(board: &Board) -> Outcome {
    if let Some(&player) = Player::BOTH.iter().find(|&&p| has_line(board, p)) {
        Outcome::WonBy(player)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
