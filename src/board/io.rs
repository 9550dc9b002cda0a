use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use itertools::Itertools;
use nom::error::Error;
use nom::Finish;

use crate::board::{Board, Player};
use crate::coord::Coord;

/// Error returned when parsing a board from its compact form, eg. `"AB./.A./..B"`.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("invalid board string {input:?}: {reason}")]
pub struct InvalidBoardString {
    pub input: String,
    pub reason: String,
}

mod parse {
    use nom::character::complete::{char, one_of};
    use nom::combinator::{eof, map};
    use nom::multi::count;
    use nom::sequence::{terminated, tuple};
    use nom::IResult;

    use super::*;

    type Row = Vec<Option<Player>>;

    fn tile(input: &str) -> IResult<&str, Option<Player>> {
        map(one_of("AB."), |c| match c {
            'A' => Some(Player::A),
            'B' => Some(Player::B),
            '.' => None,
            _ => unreachable!(),
        })(input)
    }

    fn row(input: &str) -> IResult<&str, Row> {
        count(tile, 3)(input)
    }

    pub fn board(input: &str) -> IResult<&str, (Row, Row, Row)> {
        terminated(
            tuple((terminated(row, char('/')), terminated(row, char('/')), row)),
            eof,
        )(input)
    }
}

impl FromStr for Board {
    type Err = InvalidBoardString;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (_, (r0, r1, r2)) = parse::board(s)
            .finish()
            .map_err(|e: Error<&str>| InvalidBoardString {
                input: s.to_owned(),
                reason: format!("{:?} at {:?}", e.code, e.input),
            })?;

        let mut board = Board::new();
        for (coord, tile) in Coord::all().zip(r0.into_iter().chain(r1).chain(r2)) {
            if let Some(player) = tile {
                // the board is fresh, so every cell is still empty
                let _ = board.place(coord, player);
            }
        }
        Ok(board)
    }
}

impl Board {
    /// The compact form accepted by [FromStr], rows separated by `/`.
    pub fn to_compact(&self) -> String {
        (0..3)
            .map(|row| {
                (0..3)
                    .map(|col| tile_to_char(self.tile(Coord::from_rc(row, col))))
                    .collect::<String>()
            })
            .join("/")
    }
}

fn tile_to_char(tile: Option<Player>) -> char {
    match tile {
        Some(player) => player.to_char(),
        None => '.',
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Board(\"{}\")", self.to_compact())
    }
}

/// Renders the grid, showing the label of each empty cell so a human knows what to type.
impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            if row != 0 {
                writeln!(f, "---+---+---")?;
            }
            let line = (0..3)
                .map(|col| {
                    let coord = Coord::from_rc(row, col);
                    match self.tile(coord) {
                        Some(player) => format!(" {} ", player.to_char()),
                        None => format!(" {} ", coord.label()),
                    }
                })
                .join("|");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
