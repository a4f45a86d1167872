//! Draw-or-win strategy verdict for an in-progress tournament.

use serde::Serialize;

use crate::logic::top_eight::top8_probability;
use crate::models::Record;

/// Probability at which a line counts as comfortably making the cut.
const TARGET_PROBABILITY: u8 = 75;

/// Recommendation for the remaining rounds.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StrategyVerdict {
    /// Drawing every remaining round still locks the cut.
    SafeToDraw { draw_all_probability: u8 },
    /// Drawing out is probably fine; winning removes the doubt.
    DrawLikelySafe { draw_all_probability: u8 },
    /// At least this many more wins before drawing becomes safe.
    NeedWins { wins: u32 },
    /// Even winning out probably misses the cut.
    LongShot { win_all_probability: u8 },
    /// Must keep winning; intentional draws are unsafe.
    MustKeepWinning,
}

/// Pick a recommendation by searching the remaining-round outcome space.
///
/// Every probe shares the same OMW estimate so the verdict agrees with the
/// scenario table it is shown next to.
pub fn derive_strategy(
    record: Record,
    total_rounds: u32,
    num_players: u32,
    omw: Option<f64>,
) -> StrategyVerdict {
    let remaining = total_rounds.saturating_sub(record.rounds_played());

    let draw_all = top8_probability(
        Record::new(record.wins, record.losses, record.draws + remaining),
        total_rounds,
        num_players,
        omw,
    );
    let win_all = top8_probability(
        Record::new(record.wins + remaining, record.losses, record.draws),
        total_rounds,
        num_players,
        omw,
    );
    // Smallest number of wins (rest drawn) that reaches the target.
    let min_wins = (0..=remaining).find(|&w| {
        top8_probability(
            Record::new(record.wins + w, record.losses, record.draws + remaining - w),
            total_rounds,
            num_players,
            omw,
        ) >= TARGET_PROBABILITY
    });

    if draw_all >= 90 {
        StrategyVerdict::SafeToDraw { draw_all_probability: draw_all }
    } else if draw_all >= 60 {
        StrategyVerdict::DrawLikelySafe { draw_all_probability: draw_all }
    } else if let Some(wins) = min_wins.filter(|&w| w > 0) {
        StrategyVerdict::NeedWins { wins }
    } else if win_all < 25 {
        StrategyVerdict::LongShot { win_all_probability: win_all }
    } else {
        StrategyVerdict::MustKeepWinning
    }
}
