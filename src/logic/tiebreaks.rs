//! Opponent match-win estimate from the order of round results.

use crate::models::RoundResult;

/// Floor the tournament rules place under any opponent's match-win percentage.
const OMW_FLOOR: f64 = 0.33;

/// Offset between a beaten (or winning) opponent and the bracket average.
const OPPONENT_OFFSET: f64 = 0.04;

/// Estimate OMW% from the sequence of round results. `None` when nothing has
/// been played yet.
///
/// Walks the played rounds in order, modelling the strength of the pairing
/// bracket at each point from the running record *before* that round:
/// beating an opponent suggests they sat slightly below the bracket average,
/// losing suggests slightly above, a draw sits right on it. Draws do not
/// move the running record, so a run of draws keeps the bracket estimate
/// frozen. Unplayed entries are skipped without advancing the walk.
///
/// The estimate is positional: the same wins and losses in a different order
/// give a different OMW%, since early losses land in a weaker presumed
/// bracket than late ones.
pub fn estimate_omw(results: &[RoundResult], total_rounds: u32) -> Option<f64> {
    let mut cum_wins: i64 = 0;
    let mut cum_losses: i64 = 0;
    let mut sum = 0.0;
    let mut count = 0u32;

    for result in results {
        let bracket = 0.5 + (cum_wins - cum_losses) as f64 / (2.0 * f64::from(total_rounds));
        let estimate = match result {
            RoundResult::Win => {
                cum_wins += 1;
                bracket - OPPONENT_OFFSET
            }
            RoundResult::Loss => {
                cum_losses += 1;
                bracket + OPPONENT_OFFSET
            }
            RoundResult::Draw => bracket,
            RoundResult::Unplayed => continue,
        };
        sum += estimate.clamp(OMW_FLOOR, 1.0);
        count += 1;
    }

    if count == 0 {
        None
    } else {
        Some(sum / f64::from(count))
    }
}
