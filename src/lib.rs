//! Swiss qualification calculator: library with models and estimation logic.

pub mod logic;
pub mod models;

pub use logic::{
    day2_report, day2_verdict, derive_strategy, enumerate_scenarios, estimate_omw, match_points,
    rounds_for_players, top8_field_report, top8_live_report, top8_probability, Day2Report,
    Day2Row, Day2Verdict, Scenario, StrategyVerdict, ThresholdSource, Top8FieldReport,
    Top8LiveReport, Top8Row,
};
pub use models::{Band, CalcError, Record, RoundResult, RoundTracker};
