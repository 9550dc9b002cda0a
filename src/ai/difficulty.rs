//! The computer opponent: how often it plays the minimax move instead of a random one.
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use rand::Rng;
use tracing::debug;

use crate::ai::minimax::best_move;
use crate::ai::Bot;
use crate::board::{Board, Player};
use crate::coord::Coord;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Difficulty {
    /// Every move is uniformly random.
    Easy,
    /// Each move is a coin flip between [Difficulty::Easy] and [Difficulty::Hard].
    Medium,
    /// Always the minimax move, never loses.
    Hard,
}

#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("invalid difficulty {input:?}, expected one of easy, medium, hard or 1, 2, 3")]
pub struct ParseDifficultyError {
    pub input: String,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "1" => Ok(Difficulty::Easy),
            "medium" | "2" => Ok(Difficulty::Medium),
            "hard" | "3" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError { input: s.to_owned() }),
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Pick the move `player` plays on `board` at the given difficulty. Panics if the board is full.
///
/// Only `Easy` and `Medium` consume randomness, at most one coin flip and one uniform sample per call.
pub fn select_move(board: &Board, difficulty: Difficulty, player: Player, rng: &mut impl Rng) -> Coord {
    let mv = match difficulty {
        Difficulty::Easy => board.random_available_move(rng),
        Difficulty::Medium => {
            if rng.gen_bool(0.5) {
                board.random_available_move(rng)
            } else {
                optimal_move(board, player)
            }
        }
        Difficulty::Hard => optimal_move(board, player),
    };

    debug!(%difficulty, ?player, %mv, "computer move");
    mv
}

fn optimal_move(board: &Board, player: Player) -> Coord {
    match best_move(board, player).best_move {
        Some(mv) => mv,
        None => panic!("No available moves on full board {:?}", board),
    }
}

/// Bot that plays at a fixed [Difficulty] with its own source of randomness.
pub struct DifficultyBot<R: Rng> {
    difficulty: Difficulty,
    rng: R,
}

impl<R: Rng> Debug for DifficultyBot<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "DifficultyBot {{ difficulty: {} }}", self.difficulty)
    }
}

impl<R: Rng> DifficultyBot<R> {
    pub fn new(difficulty: Difficulty, rng: R) -> Self {
        DifficultyBot { difficulty, rng }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl<R: Rng> Bot for DifficultyBot<R> {
    fn select_move(&mut self, board: &Board, player: Player) -> Coord {
        select_move(board, self.difficulty, player, &mut self.rng)
    }
}
