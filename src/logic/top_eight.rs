//! Top 8 probability estimate and report assembly.

use serde::Serialize;

use crate::logic::qualify::ThresholdSource;
use crate::logic::scenarios::{enumerate_scenarios, Scenario};
use crate::logic::scoring::rounds_for_players;
use crate::logic::strategy::{derive_strategy, StrategyVerdict};
use crate::logic::tiebreaks::estimate_omw;
use crate::models::{Band, CalcError, Record, RoundResult};

/// Probability (0-100) that a record makes the Top 8 cut.
///
/// Measures the record's final points against the field-size cut line and
/// maps the difference through a fixed table. An OMW% estimate, when
/// supplied, nudges the result only in the tiebreaker-sensitive zone right
/// at the cut (diff in [-2, 0]); outside that zone tiebreakers are assumed
/// not to matter, however extreme the estimate.
pub fn top8_probability(record: Record, total_rounds: u32, num_players: u32, omw: Option<f64>) -> u8 {
    if num_players <= 8 {
        // The whole field is the Top 8.
        return 100;
    }
    let threshold = ThresholdSource::FieldSize(num_players).threshold_points(total_rounds);
    let diff = i64::from(record.points()) - i64::from(threshold);
    let base: i32 = if diff >= 6 {
        100
    } else if diff >= 3 {
        98
    } else if diff >= 1 {
        92
    } else if diff == 0 {
        75
    } else if diff == -1 {
        50
    } else if diff == -2 {
        25
    } else if diff == -3 {
        10
    } else if diff == -4 {
        3
    } else if diff == -5 {
        1
    } else {
        0
    };
    let adjusted = base + omw.map_or(0, |omw| omw_adjustment(diff, omw));
    adjusted.clamp(0, 100) as u8
}

/// Additive tiebreaker nudge; zero everywhere except diff in [-2, 0].
fn omw_adjustment(diff: i64, omw: f64) -> i32 {
    let idx = match diff {
        0 => 0,
        -1 => 1,
        -2 => 2,
        _ => return 0,
    };
    if omw > 0.55 {
        [10, 10, 5][idx]
    } else if omw > 0.50 {
        [5, 4, 2][idx]
    } else if omw < 0.40 {
        [-15, -10, -8][idx]
    } else if omw < 0.45 {
        [-8, -5, -3][idx]
    } else {
        0
    }
}

/// One row of a Top 8 scenario table.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Top8Row {
    pub scenario: Scenario,
    pub points: u32,
    pub probability: u8,
    pub band: Band,
    pub label: &'static str,
    pub style: &'static str,
}

/// Pre-tournament view: every possible final record for a field.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Top8FieldReport {
    pub num_players: u32,
    pub total_rounds: u32,
    pub threshold_points: u32,
    pub rows: Vec<Top8Row>,
}

/// Build the all-records table for a field: one row per possible final
/// record over the whole tournament.
pub fn top8_field_report(num_players: u32) -> Result<Top8FieldReport, CalcError> {
    if num_players < 8 {
        return Err(CalcError::FieldTooSmall { num_players });
    }
    let total_rounds = rounds_for_players(num_players);
    Ok(Top8FieldReport {
        num_players,
        total_rounds,
        threshold_points: ThresholdSource::FieldSize(num_players).threshold_points(total_rounds),
        rows: scenario_rows(Record::default(), total_rounds, total_rounds, num_players, None),
    })
}

/// In-progress view for a record, with the strategy verdict and (when a
/// round-by-round sequence is available) the OMW estimate folded in.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Top8LiveReport {
    pub record: Record,
    pub points: u32,
    pub num_players: u32,
    pub total_rounds: u32,
    pub remaining: u32,
    pub threshold_points: u32,
    pub omw_estimate: Option<f64>,
    pub probability: u8,
    pub band: Band,
    pub label: &'static str,
    pub style: &'static str,
    pub verdict: StrategyVerdict,
    pub rows: Vec<Top8Row>,
}

/// Build the in-progress report. `results`, when present, is the ordered
/// round sequence the OMW estimate is taken from; the record-only variant
/// passes `None` and skips the tiebreaker adjustment.
pub fn top8_live_report(
    record: Record,
    results: Option<&[RoundResult]>,
    num_players: u32,
) -> Result<Top8LiveReport, CalcError> {
    if num_players < 8 {
        return Err(CalcError::FieldTooSmall { num_players });
    }
    let total_rounds = rounds_for_players(num_players);
    let rounds_played = record.rounds_played();
    if rounds_played > total_rounds {
        return Err(CalcError::RecordExceedsRounds { rounds_played, total_rounds });
    }
    if rounds_played == 0 {
        return Err(CalcError::NoRoundsPlayed);
    }

    // One OMW estimate shared by the summary, every table row, and the
    // strategy probes, so the whole report is internally consistent.
    let omw_estimate = results.and_then(|r| estimate_omw(r, total_rounds));
    let remaining = total_rounds - rounds_played;
    let probability = top8_probability(record, total_rounds, num_players, omw_estimate);
    let band = Band::from_probability(probability);

    Ok(Top8LiveReport {
        record,
        points: record.points(),
        num_players,
        total_rounds,
        remaining,
        threshold_points: ThresholdSource::FieldSize(num_players).threshold_points(total_rounds),
        omw_estimate,
        probability,
        band,
        label: band.label(),
        style: band.style(),
        verdict: derive_strategy(record, total_rounds, num_players, omw_estimate),
        rows: scenario_rows(record, remaining, total_rounds, num_players, omw_estimate),
    })
}

/// Scenario table rows: every split of `span` rounds appended to `base`.
fn scenario_rows(
    base: Record,
    span: u32,
    total_rounds: u32,
    num_players: u32,
    omw: Option<f64>,
) -> Vec<Top8Row> {
    enumerate_scenarios(span)
        .into_iter()
        .map(|scenario| {
            let line = base.with_scenario(scenario);
            let probability = top8_probability(line, total_rounds, num_players, omw);
            let band = Band::from_probability(probability);
            Top8Row {
                scenario,
                points: line.points(),
                probability,
                band,
                label: band.label(),
                style: band.style(),
            }
        })
        .collect()
}
