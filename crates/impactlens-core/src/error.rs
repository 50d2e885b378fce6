//! Error type shared by the impactlens crates

use chrono::NaiveDate;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ImpactError>;

#[derive(Debug, Error)]
pub enum ImpactError {
    #[error("impact score {0} is outside 1..=5")]
    ScoreOutOfRange(u8),

    #[error("AI usage {0}% is outside 0..=100")]
    AiUsageOutOfRange(u8),

    #[error("generation window starts {start} after it ends {end}")]
    InvertedWindow { start: NaiveDate, end: NaiveDate },

    #[error("weekly volume for {phase} must be at least one record")]
    EmptyWeeklyVolume { phase: &'static str },

    #[error("unknown {kind} `{value}`")]
    UnknownName { kind: &'static str, value: String },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ImpactError {
    pub fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        ImpactError::UnknownName {
            kind,
            value: value.into(),
        }
    }
}
