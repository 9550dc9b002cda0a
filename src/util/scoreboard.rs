//! Per-difficulty results of a human playing against the computer, kept for the lifetime of the process.
use std::fmt::{Display, Formatter};

use crate::ai::difficulty::Difficulty;
use crate::wdl::{OutcomeWDL, WDL};

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct SessionStats {
    pub games: u32,
    /// From the POV of the human.
    pub wdl: WDL<u32>,
}

impl SessionStats {
    pub fn wins(&self) -> u32 {
        self.wdl.win
    }

    pub fn draws(&self) -> u32 {
        self.wdl.draw
    }

    pub fn losses(&self) -> u32 {
        self.wdl.loss
    }

    /// Wins per loss, or just the number of wins if there are no losses yet.
    pub fn ratio(&self) -> f32 {
        let wdl = self.wdl.cast::<f32>();
        if self.wdl.loss == 0 {
            wdl.win
        } else {
            wdl.win / wdl.loss
        }
    }

    pub fn record(&mut self, outcome: OutcomeWDL) {
        self.games += 1;
        self.wdl += outcome.to_wdl();
    }
}

/// The [SessionStats] for each [Difficulty].
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Scoreboard {
    stats: [SessionStats; 3],
}

impl Scoreboard {
    pub fn new() -> Self {
        Scoreboard::default()
    }

    /// Record a finished round played at `difficulty`, `outcome` is from the POV of the human.
    pub fn record(&mut self, difficulty: Difficulty, outcome: OutcomeWDL) {
        self.stats[index(difficulty)].record(outcome);
    }

    pub fn get(&self, difficulty: Difficulty) -> &SessionStats {
        &self.stats[index(difficulty)]
    }

    pub fn total(&self) -> SessionStats {
        self.stats.iter().fold(SessionStats::default(), |acc, s| SessionStats {
            games: acc.games + s.games,
            wdl: acc.wdl + s.wdl,
        })
    }
}

fn index(difficulty: Difficulty) -> usize {
    match difficulty {
        Difficulty::Easy => 0,
        Difficulty::Medium => 1,
        Difficulty::Hard => 2,
    }
}

impl Display for Scoreboard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{:<10}{:>8}{:>8}{:>10}{:>8}{:>12}",
            "Difficulty", "Games", "Wins", "Losses", "Draws", "W/L Ratio"
        )?;
        writeln!(f, "{}", "-".repeat(56))?;
        for difficulty in Difficulty::ALL {
            let s = self.get(difficulty);
            writeln!(
                f,
                "{:<10}{:>8}{:>8}{:>10}{:>8}{:>12.2}",
                difficulty.name(),
                s.games,
                s.wins(),
                s.losses(),
                s.draws(),
                s.ratio()
            )?;
        }
        Ok(())
    }
}
