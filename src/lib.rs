#![warn(missing_debug_implementations)]
#![allow(clippy::new_without_default)]

//! The rules of [Tic Tac Toe](https://en.wikipedia.org/wiki/Tic-tac-toe) and a computer opponent to play it against.
//!
//! The crate is built around a few small pieces:
//! * [Board](crate::board::Board), the 3x3 grid. [Board::place](crate::board::Board::place) is the only
//!     way to fill a cell and rejects occupied cells.
//! * [eval](crate::eval), which detects three in a row and classifies a board as in progress, won or drawn.
//! * [minimax](crate::ai::minimax), an exhaustive search over the full game tree that finds the best move for a player.
//! * [Difficulty](crate::ai::difficulty::Difficulty), which degrades the computer player by mixing in random moves.
//! * [Round](crate::game::Round), the turn state machine that alternates between the players until the game ends.
//!
//! Utilities around this:
//! * A bot vs bot game runner to compare playing strength, see [bot_game](crate::util::bot_game).
//! * A per-difficulty [Scoreboard](crate::util::scoreboard::Scoreboard) for human vs computer sessions.
//! * Simple game statistics (perft, reachable positions) which are used to test the implementation.
//!
//! # Examples
//!
//! ## Find the best move on a board.
//!
//! ```
//! use ttt_engine::ai::minimax::best_move;
//! use ttt_engine::board::{Board, Player};
//! use ttt_engine::coord::Coord;
//!
//! let board: Board = "AA./BB./...".parse().unwrap();
//! let result = best_move(&board, Player::A);
//!
//! assert_eq!(result.best_move, Some(Coord::from_rc(0, 2)));
//! assert_eq!(result.value, 10);
//! ```
//!
//! ## Play a full round between two computer players.
//!
//! ```
//! use ttt_engine::ai::difficulty::{Difficulty, DifficultyBot};
//! use ttt_engine::board::Outcome;
//! use ttt_engine::game::{Round, Seat};
//! use ttt_engine::util::tiny::seeded_rng;
//!
//! let mut easy = DifficultyBot::new(Difficulty::Easy, seeded_rng(1));
//! let mut hard = DifficultyBot::new(Difficulty::Hard, seeded_rng(2));
//!
//! let mut round = Round::new();
//! let outcome = round.play(Seat::Computer(&mut easy), Seat::Computer(&mut hard));
//!
//! println!("{}", round.board());
//! assert!(outcome.is_done());
//! assert_ne!(outcome, Outcome::WonBy(ttt_engine::board::Player::A));
//! ```

pub mod board;
pub mod coord;
pub mod eval;

pub mod wdl;

pub mod ai;

pub mod config;
pub mod game;

pub mod util;
