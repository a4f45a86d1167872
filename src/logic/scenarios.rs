//! Enumeration of win/loss/draw outcome combinations over a span of rounds.

use serde::{Deserialize, Serialize};

/// One hypothetical split of a span of rounds into wins, losses, and draws.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

/// Every (wins, losses, draws) split of `remaining` rounds.
///
/// The order is part of the contract: wins descending, and within equal wins
/// draws descending, so win-heavy lines list first. The result always has
/// exactly (remaining+1)(remaining+2)/2 entries.
pub fn enumerate_scenarios(remaining: u32) -> Vec<Scenario> {
    let mut scenarios = Vec::with_capacity(((remaining + 1) * (remaining + 2) / 2) as usize);
    for wins in (0..=remaining).rev() {
        for draws in (0..=remaining - wins).rev() {
            scenarios.push(Scenario {
                wins,
                losses: remaining - wins - draws,
                draws,
            });
        }
    }
    scenarios
}
