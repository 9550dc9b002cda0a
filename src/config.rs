//! Settings chosen before a round starts, they stay fixed for the duration of the round.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::ai::difficulty::Difficulty;
use crate::board::Player;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Mode {
    /// One human against the computer.
    Single,
    /// Two humans sharing the same input.
    Multi,
}

#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("invalid mode {input:?}, expected single or multi")]
pub struct ParseModeError {
    pub input: String,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GameConfig {
    pub mode: Mode,
    /// Only used in [Mode::Single].
    pub difficulty: Difficulty,
    /// The side the human plays in [Mode::Single], the computer gets the other one.
    pub human: Player,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            mode: Mode::Single,
            difficulty: Difficulty::Hard,
            human: Player::A,
        }
    }
}

impl GameConfig {
    /// The player controlled by the computer, if any.
    pub fn computer(&self) -> Option<Player> {
        match self.mode {
            Mode::Single => Some(self.human.other()),
            Mode::Multi => None,
        }
    }

    pub fn is_computer(&self, player: Player) -> bool {
        self.computer() == Some(player)
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "1" => Ok(Mode::Single),
            "multi" | "2" => Ok(Mode::Multi),
            _ => Err(ParseModeError { input: s.to_owned() }),
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Single => write!(f, "single"),
            Mode::Multi => write!(f, "multi"),
        }
    }
}
