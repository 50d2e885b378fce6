//! Week-by-week dataset generation

use crate::synthesizer::synthesize;
use chrono::{Days, NaiveDate};
use impactlens_core::{developers, GeneratorConfig, Phase, RandomSource, Record, Result, WeeklyVolume};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct DatasetBuilder {
    config: GeneratorConfig,
}

impl DatasetBuilder {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Records for one week, chosen by the phase of the week's anchor date
    fn volume_for(volume: &WeeklyVolume, phase: Phase) -> u32 {
        match phase {
            Phase::PreCursor => volume.baseline,
            Phase::CursorRollout => volume.rollout,
            Phase::PostCursor => volume.post_cursor,
        }
    }

    /// Generate the full collection, newest first.
    ///
    /// Anchors step seven days from `start` while they are on or before `end`;
    /// records in the final week may fall as late as `last_record_date`.
    ///
    /// Panics if jitter would push a record past the end of the calendar.
    pub fn build(&self, rng: &mut dyn RandomSource) -> Vec<Record> {
        let roster = developers();
        let mut records = Vec::new();
        let mut next_id: u64 = 1;
        let mut anchor = self.config.start;

        while anchor <= self.config.end {
            let week_phase = Phase::from_date(anchor);
            let count = Self::volume_for(&self.config.weekly_volume, week_phase);
            debug!(%anchor, phase = %week_phase, count, "generating week");

            for _ in 0..count {
                let developer = &roster[rng.pick_index(roster.len())];
                let day = rng.pick_index(7) as u64;
                // Hour and minute are still drawn so the draw sequence stays stable.
                let _hour = rng.pick_index(24);
                let _minute = rng.pick_index(60);
                let date = anchor
                    .checked_add_days(Days::new(day))
                    .expect("week jitter overflows the calendar");

                // The jittered date may cross a cutoff, so the record takes its own phase.
                records.push(synthesize(
                    developer,
                    date,
                    Phase::from_date(date),
                    next_id,
                    rng,
                ));
                next_id += 1;
            }

            match anchor.checked_add_days(Days::new(7)) {
                Some(next) => anchor = next,
                None => break,
            }
        }

        records.sort_by(|a, b| b.date.cmp(&a.date));
        info!(
            records = records.len(),
            start = %self.config.start,
            end = %self.config.end,
            "dataset generated"
        );
        records
    }
}

/// Build with the default weekly volume over `[start, end]`.
pub fn build_dataset(
    start: NaiveDate,
    end: NaiveDate,
    rng: &mut dyn RandomSource,
) -> Result<Vec<Record>> {
    let config = GeneratorConfig {
        start,
        end,
        ..GeneratorConfig::default()
    };
    Ok(DatasetBuilder::new(config)?.build(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use impactlens_core::{ImpactError, SeededRandom};
    use std::collections::HashSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn default_dataset(seed: u64) -> Vec<Record> {
        let builder = DatasetBuilder::new(GeneratorConfig::default()).unwrap();
        builder.build(&mut SeededRandom::new(seed))
    }

    #[test]
    fn test_weekly_volume_by_phase() {
        let records = default_dataset(1);
        // 57 anchors: 31 pre-cursor, 9 rollout, 17 post-cursor
        assert_eq!(records.len(), 31 * 8 + 9 * 12 + 17 * 15);
    }

    #[test]
    fn test_single_week_window() {
        let mut rng = SeededRandom::new(2);
        let records = build_dataset(date(2025, 5, 5), date(2025, 5, 5), &mut rng).unwrap();
        assert_eq!(records.len(), 15);
        for record in &records {
            assert!(record.date >= date(2025, 5, 5) && record.date <= date(2025, 5, 11));
        }
    }

    #[test]
    fn test_ids_unique_and_sequential() {
        let records = default_dataset(3);
        let ids: HashSet<u64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), records.len());
        assert_eq!(ids.iter().min(), Some(&1));
        assert_eq!(ids.iter().max(), Some(&(records.len() as u64)));
    }

    #[test]
    fn test_sorted_newest_first() {
        let records = default_dataset(4);
        assert!(records.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[test]
    fn test_phase_consistent_across_cutoffs() {
        let records = default_dataset(5);
        assert!(records.iter().all(Record::is_consistent));
        assert!(records.iter().any(|r| r.phase == Phase::CursorRollout));
    }

    #[test]
    fn test_same_seed_same_dataset() {
        assert_eq!(default_dataset(42), default_dataset(42));
        assert_ne!(default_dataset(42), default_dataset(43));
    }

    /// Always draws the top of every range
    struct Ceiling;

    impl RandomSource for Ceiling {
        fn next_f64(&mut self) -> f64 {
            0.999
        }
    }

    #[test]
    #[should_panic(expected = "week jitter overflows the calendar")]
    fn test_jitter_past_calendar_end_panics() {
        let last = NaiveDate::MAX.checked_sub_days(Days::new(2)).unwrap();
        let config = GeneratorConfig {
            start: last,
            end: last,
            ..GeneratorConfig::default()
        };
        DatasetBuilder::new(config).unwrap().build(&mut Ceiling);
    }

    #[test]
    fn test_final_week_volume_is_exact() {
        let config = GeneratorConfig::default();
        let mut rng = SeededRandom::new(9);
        let records = build_dataset(config.end, config.end, &mut rng).unwrap();
        assert_eq!(records.len() as u32, config.weekly_volume.post_cursor);
        assert!(records.iter().all(|r| r.date <= config.last_record_date()));
    }

    #[test]
    fn test_inverted_window_is_rejected() {
        let mut rng = SeededRandom::new(1);
        let err = build_dataset(date(2025, 7, 31), date(2024, 7, 1), &mut rng).unwrap_err();
        assert!(matches!(err, ImpactError::InvertedWindow { .. }));
    }
}
