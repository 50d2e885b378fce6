//! Configuration for dataset generation

use crate::calendar::ymd;
use crate::error::{ImpactError, Result};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Records generated per week in each phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeeklyVolume {
    pub baseline: u32,
    pub rollout: u32,
    pub post_cursor: u32,
}

impl WeeklyVolume {
    pub fn new() -> Self {
        Self {
            baseline: 8,
            rollout: 12,
            post_cursor: 15,
        }
    }
}

impl Default for WeeklyVolume {
    fn default() -> Self {
        Self::new()
    }
}

/// Generation window, weekly volume and optional seed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// First week anchor (inclusive)
    pub start: NaiveDate,

    /// Last day a week anchor may fall on (inclusive)
    pub end: NaiveDate,

    pub weekly_volume: WeeklyVolume,

    /// Fixed seed; `None` draws from entropy
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self {
            start: ymd(2024, 7, 1),
            end: ymd(2025, 7, 31),
            weekly_volume: WeeklyVolume::new(),
            seed: None,
        }
    }

    /// Load a JSON configuration file; missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Latest date a record can carry: the final anchor may be `end` itself
    /// and records are jittered up to six days past their anchor.
    pub fn last_record_date(&self) -> NaiveDate {
        self.end
            .checked_add_days(Days::new(6))
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn validate(&self) -> Result<()> {
        if self.start > self.end {
            return Err(ImpactError::InvertedWindow {
                start: self.start,
                end: self.end,
            });
        }

        let volume = &self.weekly_volume;
        for (phase, count) in [
            ("pre-cursor", volume.baseline),
            ("cursor-rollout", volume.rollout),
            ("post-cursor", volume.post_cursor),
        ] {
            if count == 0 {
                return Err(ImpactError::EmptyWeeklyVolume { phase });
            }
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_defaults() {
        let config = GeneratorConfig::new();
        assert_eq!(config.start.to_string(), "2024-07-01");
        assert_eq!(config.end.to_string(), "2025-07-31");
        assert_eq!(config.weekly_volume.baseline, 8);
        assert_eq!(config.weekly_volume.rollout, 12);
        assert_eq!(config.weekly_volume.post_cursor, 15);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_last_record_date_covers_final_week() {
        let mut config = GeneratorConfig::new();
        config.end = ymd(2025, 9, 29);
        assert_eq!(config.last_record_date(), ymd(2025, 10, 5));

        config.end = NaiveDate::MAX;
        assert_eq!(config.last_record_date(), NaiveDate::MAX);
    }

    #[test]
    fn test_inverted_window_rejected() {
        let mut config = GeneratorConfig::new();
        std::mem::swap(&mut config.start, &mut config.end);
        assert!(matches!(
            config.validate(),
            Err(ImpactError::InvertedWindow { .. })
        ));
    }

    #[test]
    fn test_zero_volume_rejected() {
        let mut config = GeneratorConfig::new();
        config.weekly_volume.rollout = 0;
        assert!(matches!(
            config.validate(),
            Err(ImpactError::EmptyWeeklyVolume {
                phase: "cursor-rollout"
            })
        ));
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"seed": 99, "end": "2024-12-31", "weekly_volume": {{"baseline": 3}}}}"#
        )
        .unwrap();

        let config = GeneratorConfig::load(file.path()).unwrap();
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.start.to_string(), "2024-07-01");
        assert_eq!(config.end.to_string(), "2024-12-31");
        assert_eq!(config.weekly_volume.baseline, 3);
        assert_eq!(config.weekly_volume.post_cursor, 15);
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            GeneratorConfig::load(file.path()),
            Err(ImpactError::Config(_))
        ));
    }
}
