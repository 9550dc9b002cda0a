//! Various utility functions.
pub mod bot_game;
pub mod game_stats;
pub mod scoreboard;
pub mod tiny;
