//! Integration tests for the Top 8 estimator: cut thresholds, probability
//! table, OMW adjustment zone, and report assembly.

use swiss_qualifier_web::{
    top8_field_report, top8_live_report, top8_probability, Band, CalcError, Record,
    ThresholdSource,
};

fn prob32(record: Record, omw: Option<f64>) -> u8 {
    // 32 players -> 5 rounds, cut at 12 points.
    top8_probability(record, 5, 32, omw)
}

#[test]
fn tiny_fields_always_make_the_cut() {
    assert_eq!(top8_probability(Record::new(0, 3, 0), 3, 8, None), 100);
    assert_eq!(top8_probability(Record::new(0, 2, 0), 2, 4, None), 100);
}

#[test]
fn threshold_buckets_by_field_size() {
    assert_eq!(ThresholdSource::FieldSize(9).threshold_points(4), 9);
    assert_eq!(ThresholdSource::FieldSize(16).threshold_points(4), 9);
    assert_eq!(ThresholdSource::FieldSize(17).threshold_points(5), 12);
    assert_eq!(ThresholdSource::FieldSize(32).threshold_points(5), 12);
    assert_eq!(ThresholdSource::FieldSize(64).threshold_points(6), 15);
    assert_eq!(ThresholdSource::FieldSize(128).threshold_points(7), 16);
    assert_eq!(ThresholdSource::FieldSize(256).threshold_points(8), 18);
    assert_eq!(ThresholdSource::FieldSize(512).threshold_points(9), 21);
    assert_eq!(ThresholdSource::FieldSize(1024).threshold_points(10), 24);
    // Above 1024: X-2 record points.
    assert_eq!(ThresholdSource::FieldSize(2000).threshold_points(11), 27);
}

#[test]
fn fixed_points_source_passes_through() {
    assert_eq!(ThresholdSource::FixedPoints(19).threshold_points(9), 19);
}

#[test]
fn four_one_in_32_players_sits_at_75() {
    // 12 points against a 12-point cut.
    assert_eq!(prob32(Record::new(4, 1, 0), None), 75);
}

#[test]
fn probability_table_by_diff() {
    // 32 players, cut 12: walk the diff ladder via points.
    assert_eq!(prob32(Record::new(5, 0, 0), None), 98); // 15, diff +3
    assert_eq!(prob32(Record::new(4, 0, 1), None), 92); // 13, diff +1
    assert_eq!(prob32(Record::new(3, 0, 2), None), 50); // 11, diff -1
    assert_eq!(prob32(Record::new(3, 1, 1), None), 25); // 10, diff -2
    assert_eq!(prob32(Record::new(3, 2, 0), None), 10); // 9, diff -3
    assert_eq!(prob32(Record::new(2, 1, 2), None), 3); // 8, diff -4
    assert_eq!(prob32(Record::new(2, 2, 1), None), 1); // 7, diff -5
    assert_eq!(prob32(Record::new(2, 3, 0), None), 0); // 6, diff -6
}

#[test]
fn probability_monotonic_in_wins() {
    // Converting losses into wins never lowers the estimate.
    for num_players in [16u32, 32, 128, 512] {
        let rounds = swiss_qualifier_web::rounds_for_players(num_players);
        let mut last = 0u8;
        for wins in 0..=rounds {
            let p = top8_probability(
                Record::new(wins, rounds - wins, 0),
                rounds,
                num_players,
                None,
            );
            assert!(p >= last, "prob dropped at {wins} wins in {num_players} players");
            last = p;
        }
    }
}

#[test]
fn omw_adjusts_only_near_the_cut() {
    // diff 0 (4-1-0, 12 points).
    let at_cut = Record::new(4, 1, 0);
    assert_eq!(prob32(at_cut, Some(0.56)), 85);
    assert_eq!(prob32(at_cut, Some(0.52)), 80);
    assert_eq!(prob32(at_cut, Some(0.50)), 75);
    assert_eq!(prob32(at_cut, Some(0.45)), 75);
    assert_eq!(prob32(at_cut, Some(0.44)), 67);
    assert_eq!(prob32(at_cut, Some(0.35)), 60);

    // diff -1 and -2 get their own columns.
    assert_eq!(prob32(Record::new(3, 0, 2), Some(0.60)), 60); // 50 + 10
    assert_eq!(prob32(Record::new(3, 1, 1), Some(0.60)), 30); // 25 + 5
    assert_eq!(prob32(Record::new(3, 1, 1), Some(0.38)), 17); // 25 - 8

    // Outside the zone the estimate is untouched, however extreme the OMW.
    assert_eq!(prob32(Record::new(3, 2, 0), Some(0.95)), 10); // diff -3
    assert_eq!(prob32(Record::new(3, 2, 0), Some(0.20)), 10);
    assert_eq!(prob32(Record::new(4, 0, 1), Some(0.20)), 92); // diff +1
}

#[test]
fn field_report_covers_every_final_record() {
    let report = top8_field_report(32).unwrap();
    assert_eq!(report.total_rounds, 5);
    assert_eq!(report.threshold_points, 12);
    assert_eq!(report.rows.len(), 21); // (5+1)(5+2)/2

    // Win-out line first, loss-out line last.
    let first = &report.rows[0];
    assert_eq!((first.scenario.wins, first.scenario.losses, first.scenario.draws), (5, 0, 0));
    assert_eq!(first.probability, 98);
    assert_eq!(first.band, Band::Lock);

    let last = report.rows.last().unwrap();
    assert_eq!((last.scenario.wins, last.scenario.losses, last.scenario.draws), (0, 5, 0));
    assert_eq!(last.probability, 0);
    assert_eq!(last.band, Band::Dead);
}

#[test]
fn field_report_rejects_small_fields() {
    assert_eq!(
        top8_field_report(7),
        Err(CalcError::FieldTooSmall { num_players: 7 })
    );
}

#[test]
fn live_report_guards() {
    assert_eq!(
        top8_live_report(Record::new(1, 0, 0), None, 7),
        Err(CalcError::FieldTooSmall { num_players: 7 })
    );
    assert_eq!(
        top8_live_report(Record::default(), None, 32),
        Err(CalcError::NoRoundsPlayed)
    );
    assert_eq!(
        top8_live_report(Record::new(6, 0, 0), None, 32),
        Err(CalcError::RecordExceedsRounds { rounds_played: 6, total_rounds: 5 })
    );
}

#[test]
fn live_report_summarizes_the_current_record() {
    let report = top8_live_report(Record::new(4, 1, 0), None, 32).unwrap();
    assert_eq!(report.points, 12);
    assert_eq!(report.remaining, 0);
    assert_eq!(report.probability, 75);
    assert_eq!(report.band, Band::Likely);
    assert_eq!(report.omw_estimate, None);
    assert_eq!(report.rows.len(), 1);
}
