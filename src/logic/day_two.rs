//! Day 2 qualification: banding and verdict against a published point bar.

use serde::Serialize;

use crate::logic::qualify::ThresholdSource;
use crate::logic::scenarios::{enumerate_scenarios, Scenario};
use crate::models::{Band, CalcError, Record};

/// What the player has to do with the remaining rounds to make Day 2.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Day2Verdict {
    /// Already at or past the bar, whatever happens next.
    AlreadyQualified,
    /// Even winning out falls short.
    Eliminated,
    /// Drawing every remaining round is enough.
    DrawOutSufficient,
    /// One more win locks it; the rest of the rounds are free.
    OneWinSecures,
    /// At least `wins` more wins needed. `can_lose_rest` tells whether the
    /// other rounds can be lost outright or must all be drawn.
    NeedWins { wins: u32, can_lose_rest: bool },
    /// Only winning every remaining round gets there.
    MustWinOut,
}

/// Decide the Day 2 verdict for `points` against `threshold` with
/// `remaining` rounds left to play.
///
/// The check order is load-bearing: qualification first, mathematical
/// elimination before any search, draw-out before counting wins.
pub fn day2_verdict(points: u32, threshold: u32, remaining: u32) -> Day2Verdict {
    if points >= threshold {
        return Day2Verdict::AlreadyQualified;
    }
    if points + remaining * 3 < threshold {
        return Day2Verdict::Eliminated;
    }
    if points + remaining >= threshold {
        return Day2Verdict::DrawOutSufficient;
    }
    // Smallest number of wins that clears the bar with the rest drawn.
    let min_wins = (0..=remaining).find(|&w| points + w * 3 + (remaining - w) >= threshold);
    match min_wins {
        Some(wins) => {
            let can_lose_rest = points + wins * 3 >= threshold;
            if wins == 1 && can_lose_rest {
                Day2Verdict::OneWinSecures
            } else {
                Day2Verdict::NeedWins { wins, can_lose_rest }
            }
        }
        // Unreachable once the elimination check has passed.
        None => Day2Verdict::MustWinOut,
    }
}

/// One row of the Day 2 scenario table.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Day2Row {
    pub scenario: Scenario,
    pub points: u32,
    pub band: Band,
    pub label: String,
    pub style: &'static str,
}

/// Day 2 outlook for a record: current band, verdict, and the full table of
/// remaining-round scenarios.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Day2Report {
    pub record: Record,
    pub points: u32,
    pub threshold: u32,
    pub total_rounds: u32,
    pub remaining: u32,
    pub band: Band,
    pub verdict: Day2Verdict,
    pub rows: Vec<Day2Row>,
}

/// Build the Day 2 report. Guards the inputs; the estimator itself is total.
pub fn day2_report(record: Record, total_rounds: u32, threshold: u32) -> Result<Day2Report, CalcError> {
    if total_rounds < 1 {
        return Err(CalcError::InvalidRounds);
    }
    if threshold < 1 {
        return Err(CalcError::InvalidThreshold);
    }
    let rounds_played = record.rounds_played();
    if rounds_played > total_rounds {
        return Err(CalcError::RecordExceedsRounds { rounds_played, total_rounds });
    }

    let remaining = total_rounds - rounds_played;
    let points = record.points();
    let bar = ThresholdSource::FixedPoints(threshold).threshold_points(total_rounds);

    let rows = enumerate_scenarios(remaining)
        .into_iter()
        .map(|scenario| {
            let line = record.with_scenario(scenario);
            let diff = i64::from(line.points()) - i64::from(bar);
            let band = Band::from_points_diff(diff);
            Day2Row {
                scenario,
                points: line.points(),
                band,
                label: row_label(band, diff),
                style: band.style(),
            }
        })
        .collect();

    let diff = i64::from(points) - i64::from(bar);
    Ok(Day2Report {
        record,
        points,
        threshold: bar,
        total_rounds,
        remaining,
        band: Band::from_points_diff(diff),
        verdict: day2_verdict(points, bar, remaining),
        rows,
    })
}

/// Row label; the point bar is hard, so rows at or over it read as made.
fn row_label(band: Band, diff: i64) -> String {
    if diff == 0 {
        "Exactly at the bar".to_string()
    } else if diff > 0 {
        "Over the bar".to_string()
    } else {
        band.label().to_string()
    }
}
