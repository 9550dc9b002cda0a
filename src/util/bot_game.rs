//! Utilities to run bots against each other and report the results.
use std::fmt::{Debug, Formatter};
use std::time::Instant;

use crate::ai::Bot;
use crate::board::{Board, Outcome, Player};
use crate::coord::Coord;
use crate::game::{Round, Seat};
use crate::wdl::{POV, WDL};

/// Run `bot_l` against `bot_r`, each game starting from an empty board.
///
/// `games_per_side` games are run with `bot_l` playing [Player::A], except if `both_sides` is true,
/// in which case the same number of games is added with `bot_l` playing [Player::B].
///
/// `callback` is called after every game with the running totals from the POV of `bot_l`.
#[must_use]
pub fn run<L: Bot, R: Bot>(
    bot_l: impl Fn() -> L,
    bot_r: impl Fn() -> R,
    games_per_side: u32,
    both_sides: bool,
    mut callback: impl FnMut(WDL<u32>, &Replay),
) -> BotGameResult {
    let debug_l = format!("{:?}", bot_l());
    let debug_r = format!("{:?}", bot_r());

    let game_count = if both_sides { 2 * games_per_side } else { games_per_side };
    let mut partial_wdl = WDL::<u32>::default();

    let replays: Vec<Replay> = (0..game_count)
        .map(|game_i| {
            let flip = both_sides && game_i % 2 == 1;
            let replay = play_single_game(flip, &mut bot_l(), &mut bot_r());

            if let Some(wdl) = replay.outcome.pov(replay.player_l) {
                partial_wdl += wdl.to_wdl();
            }
            callback(partial_wdl, &replay);

            replay
        })
        .collect();

    let total_time_l = replays.iter().map(|r| r.total_time_l).sum::<f32>();
    let total_time_r = replays.iter().map(|r| r.total_time_r).sum::<f32>();
    let move_count_l = replays.iter().map(|r| r.move_count_l).sum::<u32>();
    let move_count_r = replays.iter().map(|r| r.move_count_r).sum::<u32>();

    BotGameResult {
        game_count,
        average_game_length: replays.iter().map(|r| r.moves.len() as f32).sum::<f32>() / game_count as f32,
        wdl_l: partial_wdl,
        time_l: total_time_l / move_count_l.max(1) as f32,
        time_r: total_time_r / move_count_r.max(1) as f32,
        debug_l,
        debug_r,
        replays,
    }
}

/// Play a single round between two bots, `bot_l` plays [Player::A] unless `flip` is set.
pub fn play_single_game(flip: bool, bot_l: &mut impl Bot, bot_r: &mut impl Bot) -> Replay {
    let player_l = if flip { Player::B } else { Player::A };

    let mut timed_l = TimedBot::new(bot_l);
    let mut timed_r = TimedBot::new(bot_r);

    let mut round = Round::new();
    let outcome = if flip {
        round.play(Seat::Computer(&mut timed_r), Seat::Computer(&mut timed_l))
    } else {
        round.play(Seat::Computer(&mut timed_l), Seat::Computer(&mut timed_r))
    };

    Replay {
        player_l,
        moves: round.moves().to_vec(),
        outcome,
        total_time_l: timed_l.total_time,
        total_time_r: timed_r.total_time,
        move_count_l: timed_l.move_count,
        move_count_r: timed_r.move_count,
    }
}

/// Wrapper that measures the time spent in [Bot::select_move].
struct TimedBot<'a, B: Bot> {
    inner: &'a mut B,
    total_time: f32,
    move_count: u32,
}

impl<'a, B: Bot> TimedBot<'a, B> {
    fn new(inner: &'a mut B) -> Self {
        TimedBot {
            inner,
            total_time: 0.0,
            move_count: 0,
        }
    }
}

impl<B: Bot> Debug for TimedBot<'_, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.inner)
    }
}

impl<B: Bot> Bot for TimedBot<'_, B> {
    fn select_move(&mut self, board: &Board, player: Player) -> Coord {
        let start = Instant::now();
        let mv = self.inner.select_move(board, player);
        self.total_time += start.elapsed().as_secs_f32();
        self.move_count += 1;
        mv
    }
}

#[derive(Debug, Clone)]
pub struct Replay {
    pub player_l: Player,

    pub moves: Vec<Coord>,
    pub outcome: Outcome,

    pub total_time_l: f32,
    pub total_time_r: f32,
    pub move_count_l: u32,
    pub move_count_r: u32,
}

/// Structure returned by the function [`run`].
pub struct BotGameResult {
    pub game_count: u32,
    pub replays: Vec<Replay>,

    pub average_game_length: f32,
    pub wdl_l: WDL<u32>,

    //time per move in seconds
    pub time_l: f32,
    pub time_r: f32,

    pub debug_l: String,
    pub debug_r: String,
}

impl Debug for BotGameResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "BotGameResult {{")?;
        writeln!(
            f,
            "  {} games, average length {}",
            self.game_count, self.average_game_length
        )?;
        writeln!(f, "  left      {:?}", self.wdl_l)?;
        writeln!(
            f,
            "  left      {:.3?}",
            self.wdl_l.cast::<f32>() / self.game_count.max(1) as f32
        )?;
        writeln!(f, "  time_l:   {:.4}, time_r: {:.4}", self.time_l, self.time_r)?;
        writeln!(f, "  left:     {}", self.debug_l)?;
        writeln!(f, "  right:    {}", self.debug_r)?;
        writeln!(f, "}}")?;

        Ok(())
    }
}
