use internal_iterator::{InternalIterator, IteratorExt};
use rand::Rng;
use tracing::trace;

use crate::coord::Coord;
use crate::eval;

mod io;

pub use io::InvalidBoardString;

/// One of the two players. `A` always moves first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    A,
    B,
}

/// The absolute status of a board. Always derived from the tiles, never stored.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Outcome {
    InProgress,
    WonBy(Player),
    Draw,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum PlaceError {
    #[error("cell {} is already occupied", .0.label())]
    CellOccupied(Coord),
}

/// The 3x3 grid. Each tile is either empty or taken by one of the players.
///
/// The board itself does not track whose turn it is, that is the job of [Round](crate::game::Round).
/// [Board::next_player] derives it from the tile counts for callers that only have a board.
#[derive(Default, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    tiles: [Option<Player>; Coord::COUNT],
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::A, Player::B];

    pub fn other(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Player::A => 'A',
            Player::B => 'B',
        }
    }
}

impl Outcome {
    pub fn is_done(self) -> bool {
        self != Outcome::InProgress
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::WonBy(player) => Some(player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}

impl Board {
    pub fn new() -> Self {
        Board::default()
    }

    /// Clear every tile.
    pub fn reset(&mut self) {
        self.tiles = Default::default();
    }

    pub fn tile(&self, coord: Coord) -> Option<Player> {
        self.tiles[coord.index()]
    }

    pub fn is_available_move(&self, coord: Coord) -> bool {
        self.tiles[coord.index()].is_none()
    }

    /// The empty cells in row-major order.
    pub fn available_moves(&self) -> impl InternalIterator<Item = Coord> + '_ {
        Coord::all().filter(move |&c| self.is_available_move(c)).into_internal()
    }

    /// Same as [Board::available_moves] but collected, empty iff the board is full.
    pub fn legal_moves(&self) -> Vec<Coord> {
        self.available_moves().collect()
    }

    /// Put `player` on `coord`. Fails without touching the board if the cell is not empty.
    ///
    /// This is the only way tiles get filled, both during play and during search.
    pub fn place(&mut self, coord: Coord, player: Player) -> Result<(), PlaceError> {
        match self.tiles[coord.index()] {
            Some(owner) => {
                trace!(%coord, ?owner, ?player, "rejected placement");
                Err(PlaceError::CellOccupied(coord))
            }
            None => {
                self.tiles[coord.index()] = Some(player);
                Ok(())
            }
        }
    }

    /// Clear a single tile again, used to backtrack during search.
    pub fn undo(&mut self, coord: Coord) {
        self.tiles[coord.index()] = None;
    }

    pub fn is_full(&self) -> bool {
        self.tiles.iter().all(|tile| tile.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.iter().all(|tile| tile.is_none())
    }

    pub fn count(&self, player: Player) -> usize {
        self.tiles.iter().filter(|&&tile| tile == Some(player)).count()
    }

    /// The player to move assuming `A` started and both players alternated.
    pub fn next_player(&self) -> Player {
        if self.count(Player::A) > self.count(Player::B) {
            Player::B
        } else {
            Player::A
        }
    }

    /// Pick a random empty cell with a uniform distribution. Panics if the board is full.
    pub fn random_available_move(&self, rng: &mut impl Rng) -> Coord {
        let moves = self.legal_moves();
        assert!(!moves.is_empty(), "No available moves on full board {:?}", self);
        moves[rng.gen_range(0..moves.len())]
    }

    /// Shorthand for [eval::classify].
    pub fn outcome(&self) -> Outcome {
        eval::classify(self)
    }

    pub fn is_done(&self) -> bool {
        self.outcome().is_done()
    }
}
