use ttt_engine::ai::difficulty::{Difficulty, DifficultyBot};
use ttt_engine::board::Board;
use ttt_engine::util::game_stats::{all_possible_boards, average_game_stats, perft};
use ttt_engine::util::tiny::consistent_rng;

#[test]
fn perft_empty() {
    let board = Board::new();
    let expected = [1, 9, 72, 504, 3024, 15120, 54720];

    for (depth, &count) in expected.iter().enumerate() {
        assert_eq!(perft(&board, depth as u32), count, "depth {}", depth);
    }
}

#[test]
fn reachable_positions() {
    let all = all_possible_boards(&Board::new(), true);
    let in_progress = all_possible_boards(&Board::new(), false);

    assert_eq!(all.len(), 5478);
    assert_eq!(in_progress.len(), 4520);
    assert!(in_progress.iter().all(|b| !b.is_done()));
    assert_eq!(all.iter().filter(|b| b.is_done()).count(), 958);
}

#[test]
fn random_game_stats() {
    let bot = DifficultyBot::new(Difficulty::Easy, consistent_rng());
    let stats = average_game_stats(&Board::new(), bot, 1000);

    println!("{:?}", stats);
    assert!((5.0..=9.0).contains(&stats.game_length));
    assert!(stats.available_moves > 1.0 && stats.available_moves <= 9.0);
}
