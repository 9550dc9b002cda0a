use std::fmt::Debug;

use crate::board::{Board, Player};
use crate::coord::Coord;

pub mod difficulty;
pub mod minimax;

pub trait Bot: Debug {
    /// Pick a move for `player` to play. Panics if the board is full.
    ///
    /// `self` is mutable to allow for random state, this method is not supposed to
    /// modify `self` in any other significant way.
    fn select_move(&mut self, board: &Board, player: Player) -> Coord;
}

impl<F: FnMut(&Board, Player) -> Coord + Debug> Bot for F {
    fn select_move(&mut self, board: &Board, player: Player) -> Coord {
        self(board, player)
    }
}
