mod common;

use chrono::Duration;
use common::{date, sample_config, sample_dataset, sample_record, seeded_dataset};
use impactlens_core::{find_developer, quarter_label, team_of, Phase};
use std::collections::HashSet;

#[test]
fn test_same_seed_same_dataset() {
    assert_eq!(seeded_dataset(7), seeded_dataset(7));
    assert_ne!(seeded_dataset(7), seeded_dataset(8));
}

#[test]
fn test_records_are_internally_consistent() {
    let records = sample_dataset();
    assert!(!records.is_empty());

    for record in &records {
        assert_eq!(record.phase, Phase::from_date(record.date), "{}", record.label());
        assert_eq!(record.quarter, quarter_label(record.date));
        assert!((1..=5).contains(&record.impact_score.get()));
        assert!(record.ai_usage.get() <= 100);
        assert!(record.lines_changed >= 50);
        assert!(record.files_modified >= 1);
        assert!(record.is_consistent());

        let dev = find_developer(&record.developer).unwrap();
        let team = team_of(dev).unwrap();
        assert_eq!(record.team, team.name);
        assert_eq!(record.project, team.project);
    }
}

#[test]
fn test_dates_stay_within_last_week() {
    let config = sample_config();
    let records = sample_dataset();
    for record in &records {
        assert!(record.date >= config.start);
        assert!(record.date < config.end + Duration::days(7));
    }
}

#[test]
fn test_ids_unique_and_newest_first() {
    let records = sample_dataset();
    let ids: HashSet<u64> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids.len(), records.len());
    assert!(records.windows(2).all(|w| w[0].date >= w[1].date));
}

#[test]
fn test_post_cursor_lifts_average_impact() {
    let records = sample_dataset();
    let mean = |phase: Phase| {
        let scores: Vec<f64> = records
            .iter()
            .filter(|r| r.phase == phase)
            .map(|r| f64::from(r.impact_score.get()))
            .collect();
        scores.iter().sum::<f64>() / scores.len() as f64
    };
    assert!(mean(Phase::PostCursor) > mean(Phase::PreCursor));
}

#[test]
fn test_post_cursor_raises_ai_usage() {
    let records = sample_dataset();
    let mean = |phase: Phase| {
        let usage: Vec<f64> = records
            .iter()
            .filter(|r| r.phase == phase)
            .map(|r| f64::from(r.ai_usage.get()))
            .collect();
        usage.iter().sum::<f64>() / usage.len() as f64
    };
    assert!(mean(Phase::PostCursor) > mean(Phase::PreCursor) + 20.0);
}

#[test]
fn test_consistency_check_catches_mismatched_phase() {
    let mut record = sample_record(1, "Raj Sharma", date(2025, 2, 14), 3, "Sync engine");
    assert!(record.is_consistent());
    assert_eq!(record.quarter, "Q1 2025");

    record.phase = Phase::PreCursor;
    assert!(!record.is_consistent());
}
