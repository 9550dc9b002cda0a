use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// A cell of the 3x3 grid, stored as a row-major index.
///
/// Each coordinate also has a human-facing label `1..=9`, counting row by row starting at the top left.
/// The label is only used to map input to coordinates, it carries no game state.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Coord(u8);

pub type CoordAllIter = std::iter::Map<std::ops::Range<u8>, fn(u8) -> Coord>;

#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("invalid cell {input:?}, expected a number between 1 and 9")]
pub struct ParseCoordError {
    pub input: String,
}

impl Coord {
    pub const COUNT: usize = 9;

    pub const fn from_rc(row: u8, col: u8) -> Self {
        assert!(row < 3);
        assert!(col < 3);
        Coord(row * 3 + col)
    }

    pub fn from_index(index: u8) -> Self {
        assert!((index as usize) < Self::COUNT);
        Coord(index)
    }

    /// Panics if `label` is not in `1..=9`.
    pub fn from_label(label: u8) -> Self {
        assert!((1..=9).contains(&label), "label {} out of range", label);
        Coord(label - 1)
    }

    /// All coordinates in row-major order.
    pub fn all() -> CoordAllIter {
        (0..Self::COUNT as u8).map(Coord::from_index as fn(u8) -> Coord)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn row(self) -> u8 {
        self.0 / 3
    }

    pub fn col(self) -> u8 {
        self.0 % 3
    }

    pub fn label(self) -> u8 {
        self.0 + 1
    }

    pub fn is_corner(self) -> bool {
        self.row() != 1 && self.col() != 1
    }

    pub fn is_center(self) -> bool {
        self.0 == 4
    }
}

impl FromStr for Coord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCoordError { input: s.to_owned() };

        let label = s.trim().parse::<u8>().map_err(|_| err())?;
        if (1..=9).contains(&label) {
            Ok(Coord::from_label(label))
        } else {
            Err(err())
        }
    }
}

impl Debug for Coord {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Coord({}, {})", self.row(), self.col())
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}
