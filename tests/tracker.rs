//! Integration tests for the round tracker and the in-progress report fed
//! from it.

use swiss_qualifier_web::RoundResult::{Draw, Loss, Unplayed, Win};
use swiss_qualifier_web::{
    top8_live_report, CalcError, Record, RoundTracker, StrategyVerdict,
};

#[test]
fn new_tracker_is_fully_unplayed() {
    let tracker = RoundTracker::new(5);
    assert_eq!(tracker.total_rounds(), 5);
    assert_eq!(tracker.rounds_played(), 0);
    assert_eq!(tracker.record(), Record::default());
    assert!(tracker.results().iter().all(|r| *r == Unplayed));
}

#[test]
fn results_must_stay_a_contiguous_prefix() {
    let mut tracker = RoundTracker::new(5);
    assert_eq!(tracker.set_result(3, Win), Err(CalcError::RoundGap { round: 3 }));

    tracker.set_result(1, Win).unwrap();
    tracker.set_result(2, Draw).unwrap();
    tracker.set_result(3, Loss).unwrap();
    assert_eq!(tracker.rounds_played(), 3);
    assert_eq!(tracker.record(), Record::new(1, 1, 1));

    // Overwriting an already-played round is fine.
    tracker.set_result(2, Win).unwrap();
    assert_eq!(tracker.record(), Record::new(2, 1, 0));
}

#[test]
fn round_numbers_are_validated() {
    let mut tracker = RoundTracker::new(5);
    assert_eq!(
        tracker.set_result(0, Win),
        Err(CalcError::RoundOutOfRange { round: 0, total_rounds: 5 })
    );
    assert_eq!(
        tracker.set_result(6, Win),
        Err(CalcError::RoundOutOfRange { round: 6, total_rounds: 5 })
    );
    assert_eq!(
        tracker.clear_from(6),
        Err(CalcError::RoundOutOfRange { round: 6, total_rounds: 5 })
    );
    assert_eq!(tracker.set_result(1, Unplayed), Err(CalcError::NotAPlayedResult));
}

#[test]
fn clearing_a_round_clears_the_whole_suffix() {
    let mut tracker = RoundTracker::new(5);
    for round in 1..=4 {
        tracker.set_result(round, Win).unwrap();
    }
    tracker.clear_from(2).unwrap();
    assert_eq!(tracker.rounds_played(), 1);
    assert_eq!(tracker.results()[1..], [Unplayed; 4]);
    assert_eq!(tracker.record(), Record::new(1, 0, 0));
}

#[test]
fn live_report_folds_the_tracker_omw_into_every_row() {
    // 32 players, 5 rounds. W W L W -> 3-1-0, 9 points (diff -3, 10% base).
    // The walk averages to 0.58, so the at-the-cut rows get the strong-OMW
    // bump while the summary (diff -3) stays untouched.
    let mut tracker = RoundTracker::new(5);
    tracker.set_result(1, Win).unwrap();
    tracker.set_result(2, Win).unwrap();
    tracker.set_result(3, Loss).unwrap();
    tracker.set_result(4, Win).unwrap();

    let report = top8_live_report(tracker.record(), Some(tracker.results()), 32).unwrap();
    let omw = report.omw_estimate.unwrap();
    assert!((omw - 0.58).abs() < 1e-9);
    assert_eq!(report.probability, 10);
    assert_eq!(report.remaining, 1);
    assert_eq!(report.verdict, StrategyVerdict::NeedWins { wins: 1 });

    // Rows: win the last round (diff 0, 75 + 10), draw it (diff -2, 25 + 5),
    // lose it (diff -3, untouched).
    let probs: Vec<u8> = report.rows.iter().map(|r| r.probability).collect();
    assert_eq!(probs, vec![85, 30, 10]);
}

#[test]
fn tracker_with_no_played_rounds_cannot_report() {
    let tracker = RoundTracker::new(5);
    assert_eq!(
        top8_live_report(tracker.record(), Some(tracker.results()), 32),
        Err(CalcError::NoRoundsPlayed)
    );
}
