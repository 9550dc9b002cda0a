//! The turn state machine that drives a single round.
//!
//! A [Round] owns its [Board] and alternates between the two players, starting with [Player::A].
//! Each turn a move is requested from the [Seat] of the player to move, placed on the board and the board is
//! classified again. A rejected human move leaves the round in the same state so the move can be requested again.
use std::fmt::Debug;

use tracing::{debug, info};

use crate::ai::Bot;
use crate::board::{Board, Outcome, PlaceError, Player};
use crate::coord::Coord;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TurnState {
    AwaitingMoveFrom(Player),
    /// Terminal, there are no transitions out of this state.
    Finished(Outcome),
}

/// The source of human moves, typically something that prompts on a terminal.
pub trait MoveSource: Debug {
    /// Blocks until a move is available. `legal` is never empty.
    fn request_move(&mut self, board: &Board, player: Player, legal: &[Coord]) -> Coord;

    /// Called when the last requested move was not accepted, before a new one is requested.
    #[allow(unused_variables)]
    fn rejected(&mut self, mv: Coord, error: &PlaceError) {}
}

/// Who controls one side of the board.
#[derive(Debug)]
pub enum Seat<'a> {
    Human(&'a mut dyn MoveSource),
    Computer(&'a mut dyn Bot),
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Round {
    board: Board,
    state: TurnState,
    moves: Vec<Coord>,
}

impl Default for Round {
    fn default() -> Self {
        Round {
            board: Board::new(),
            state: TurnState::AwaitingMoveFrom(Player::A),
            moves: vec![],
        }
    }
}

impl Round {
    pub fn new() -> Self {
        Round::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// The moves played so far, in order.
    pub fn moves(&self) -> &[Coord] {
        &self.moves
    }

    pub fn outcome(&self) -> Outcome {
        match self.state {
            TurnState::AwaitingMoveFrom(_) => Outcome::InProgress,
            TurnState::Finished(outcome) => outcome,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self.state, TurnState::Finished(_))
    }

    /// The player to move. Panics if the round is finished.
    pub fn next_player(&self) -> Player {
        match self.state {
            TurnState::AwaitingMoveFrom(player) => player,
            TurnState::Finished(outcome) => panic!("Round already finished with {:?}", outcome),
        }
    }

    /// Play `mv` for the player to move and return the outcome afterwards.
    /// On failure the round is left unchanged. Panics if the round is finished.
    pub fn apply(&mut self, mv: Coord) -> Result<Outcome, PlaceError> {
        let player = self.next_player();
        self.board.place(mv, player)?;
        self.moves.push(mv);
        debug!(?player, %mv, "placed");

        let outcome = self.board.outcome();
        self.state = if outcome.is_done() {
            info!(?outcome, moves = self.moves.len(), "round finished");
            TurnState::Finished(outcome)
        } else {
            TurnState::AwaitingMoveFrom(player.other())
        };

        Ok(outcome)
    }

    /// Request a single move from `seat` and apply it. Panics if the round is finished.
    ///
    /// A human move on an occupied cell is reported to the source and returned as an error,
    /// the round stays in the same state. A computer move on an occupied cell is a bug and panics.
    pub fn step(&mut self, seat: &mut Seat) -> Result<Outcome, PlaceError> {
        let player = self.next_player();

        match seat {
            Seat::Human(source) => {
                let legal = self.board.legal_moves();
                let mv = source.request_move(&self.board, player, &legal);
                let result = self.apply(mv);
                if let Err(error) = &result {
                    source.rejected(mv, error);
                }
                result
            }
            Seat::Computer(bot) => {
                let mv = bot.select_move(&self.board, player);
                let result = self.apply(mv);
                assert!(
                    result.is_ok(),
                    "Bot {:?} played occupied cell {} on {:?}",
                    bot,
                    mv,
                    self.board
                );
                result
            }
        }
    }

    /// Keep stepping until the round is finished, `seat_a` plays for [Player::A] and `seat_b` for [Player::B].
    pub fn play<'a>(&mut self, mut seat_a: Seat<'a>, mut seat_b: Seat<'a>) -> Outcome {
        while let TurnState::AwaitingMoveFrom(player) = self.state {
            let seat = match player {
                Player::A => &mut seat_a,
                Player::B => &mut seat_b,
            };
            // rejected moves keep the state, so the same seat is asked again
            let _ = self.step(seat);
        }
        self.outcome()
    }
}
