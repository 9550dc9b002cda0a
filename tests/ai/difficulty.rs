use std::cell::Cell;
use std::collections::HashMap;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use ttt_engine::ai::difficulty::{select_move, Difficulty, DifficultyBot};
use ttt_engine::ai::minimax::best_move;
use ttt_engine::ai::Bot;
use ttt_engine::board::{Board, Outcome, Player};
use ttt_engine::coord::Coord;
use ttt_engine::util::bot_game;
use ttt_engine::util::game_stats::all_possible_boards;
use ttt_engine::util::tiny::{consistent_rng, seeded_rng};
use ttt_engine::wdl::WDL;

use crate::util::test_sampler_uniform_with;

#[test]
fn easy_is_uniform() {
    let board: Board = "AB./.../...".parse().unwrap();
    let legal = board.legal_moves();
    assert_eq!(legal.len(), 7);

    let mut bot = DifficultyBot::new(Difficulty::Easy, consistent_rng());
    test_sampler_uniform_with(&legal, true, 2000, || Some(bot.select_move(&board, Player::A)));
}

#[test]
fn hard_plays_best_move() {
    let mut rng = consistent_rng();
    for board in all_possible_boards(&Board::new(), false).into_iter().step_by(23) {
        let player = board.next_player();
        let expected = best_move(&board, player).best_move;
        assert_eq!(Some(select_move(&board, Difficulty::Hard, player, &mut rng)), expected);
    }
}

#[test]
fn every_difficulty_plays_legal_moves() {
    let mut rng = consistent_rng();
    for board in all_possible_boards(&Board::new(), false).into_iter().step_by(11) {
        let player = board.next_player();
        for difficulty in Difficulty::ALL {
            let mv = select_move(&board, difficulty, player, &mut rng);
            assert!(board.is_available_move(mv), "{} played {} on {:?}", difficulty, mv, board);
        }
    }
}

#[test]
fn medium_mixes_random_and_best() {
    // the best move is (0, 2), picked by the hard half and by 1/5 of the random half
    let board: Board = "AA./BB./...".parse().unwrap();
    let best = Coord::from_rc(0, 2);
    let legal = board.legal_moves();
    assert_eq!(legal.len(), 5);

    let trials = 10_000;
    let mut bot = DifficultyBot::new(Difficulty::Medium, consistent_rng());
    let mut counts: HashMap<Coord, u32> = HashMap::new();
    for _ in 0..trials {
        *counts.entry(bot.select_move(&board, Player::A)).or_default() += 1;
    }

    for mv in legal {
        let freq = counts.get(&mv).copied().unwrap_or(0) as f32 / trials as f32;
        let expected = if mv == best { 0.5 + 0.5 / 5.0 } else { 0.5 / 5.0 };
        assert!(
            (freq - expected).abs() < 0.03,
            "{} picked with frequency {}, expected {}",
            mv,
            freq,
            expected
        );
    }
}

/// Play `games` games of `difficulty` moving first against a hard opponent.
fn results_against_hard(difficulty: Difficulty, games: u32, seed: u64) -> WDL<u32> {
    let next_seed = Cell::new(seed);
    let next_rng = || {
        let seed = next_seed.get();
        next_seed.set(seed + 1);
        SmallRng::seed_from_u64(seed)
    };

    let result = bot_game::run(
        || DifficultyBot::new(difficulty, next_rng()),
        || DifficultyBot::new(Difficulty::Hard, next_rng()),
        games,
        false,
        |_, _| {},
    );
    println!("{} vs hard: {:?}", difficulty, result);

    assert_eq!(result.game_count, games);
    assert_eq!(result.wdl_l.sum(), games);
    result.wdl_l
}

#[test]
fn medium_is_between_easy_and_hard() {
    let games = 500;
    let easy = results_against_hard(Difficulty::Easy, games, 1000);
    let medium = results_against_hard(Difficulty::Medium, games, 2000);
    let hard = results_against_hard(Difficulty::Hard, 4, 3000);

    // nothing ever beats hard
    assert_eq!(easy.win, 0);
    assert_eq!(medium.win, 0);
    assert_eq!(hard, WDL::new(0, 4, 0));

    let rate = |count: u32, total: u32| count as f32 / total as f32;

    assert!(rate(easy.loss, games) > rate(medium.loss, games));
    assert!(rate(medium.loss, games) > rate(hard.loss, 4));

    assert!(rate(easy.draw, games) < rate(medium.draw, games));
    assert!(rate(medium.draw, games) < rate(hard.draw, 4));
}

#[test]
fn hard_self_play_is_draw_from_both_sides() {
    let result = bot_game::run(
        || DifficultyBot::new(Difficulty::Hard, consistent_rng()),
        || DifficultyBot::new(Difficulty::Hard, seeded_rng(1)),
        1,
        true,
        |_, replay| assert_eq!(replay.outcome, Outcome::Draw),
    );

    assert_eq!(result.game_count, 2);
    assert_eq!(result.wdl_l, WDL::new(0, 2, 0));
    assert_eq!(result.replays[0].player_l, Player::A);
    assert_eq!(result.replays[1].player_l, Player::B);
    assert!(result.replays.iter().all(|r| r.moves.len() == 9));
}

#[test]
fn difficulty_names() {
    for difficulty in Difficulty::ALL {
        assert_eq!(difficulty.name().parse::<Difficulty>(), Ok(difficulty));
        assert_eq!(difficulty.to_string(), difficulty.name());
    }
    assert!("impossible".parse::<Difficulty>().is_err());
}
