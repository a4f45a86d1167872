//! Estimation engine: scoring, scenario enumeration, qualification bands, verdicts.

mod day_two;
mod qualify;
mod scenarios;
mod scoring;
mod strategy;
mod tiebreaks;
mod top_eight;

pub use day_two::{day2_report, day2_verdict, Day2Report, Day2Row, Day2Verdict};
pub use qualify::ThresholdSource;
pub use scenarios::{enumerate_scenarios, Scenario};
pub use scoring::{match_points, rounds_for_players};
pub use strategy::{derive_strategy, StrategyVerdict};
pub use tiebreaks::estimate_omw;
pub use top_eight::{
    top8_field_report, top8_live_report, top8_probability, Top8FieldReport, Top8LiveReport,
    Top8Row,
};
