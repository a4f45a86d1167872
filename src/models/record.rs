//! Player record: wins, losses, draws.

use serde::{Deserialize, Serialize};

/// A player's win/loss/draw record. Value type; the engine never mutates one.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl Record {
    pub fn new(wins: u32, losses: u32, draws: u32) -> Self {
        Self { wins, losses, draws }
    }

    /// Rounds this record accounts for.
    pub fn rounds_played(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Match points: 3 per win, 1 per draw. Always derived, never stored.
    pub fn points(&self) -> u32 {
        crate::logic::match_points(self.wins, self.draws)
    }

    /// This record with `scenario` worth of further results appended.
    pub fn with_scenario(&self, scenario: crate::logic::Scenario) -> Self {
        Self {
            wins: self.wins + scenario.wins,
            losses: self.losses + scenario.losses,
            draws: self.draws + scenario.draws,
        }
    }
}
