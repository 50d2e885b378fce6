//! Core types for synthesized pull-request records

use crate::calendar::{quarter_label, POST_CURSOR_START, ROLLOUT_START};
use crate::error::ImpactError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle phase relative to the AI assistant rollout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    PreCursor,
    CursorRollout,
    PostCursor,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::PreCursor, Phase::CursorRollout, Phase::PostCursor];

    /// Phase is a pure function of the calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        if date < ROLLOUT_START {
            Phase::PreCursor
        } else if date < POST_CURSOR_START {
            Phase::CursorRollout
        } else {
            Phase::PostCursor
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::PreCursor => "pre-cursor",
            Phase::CursorRollout => "cursor-rollout",
            Phase::PostCursor => "post-cursor",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// AI adoption persona of a developer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Persona {
    EarlyAdopter,
    GradualAdopter,
    Conservative,
    AiDependent,
}

impl Persona {
    pub const ALL: [Persona; 4] = [
        Persona::EarlyAdopter,
        Persona::GradualAdopter,
        Persona::Conservative,
        Persona::AiDependent,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Junior,
    Mid,
    Senior,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 3] = [SkillLevel::Junior, SkillLevel::Mid, SkillLevel::Senior];
}

/// How eagerly a team took up the assistant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdoptionRate {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Team {
    pub name: &'static str,
    pub project: &'static str,
    pub focus: &'static str,
    pub adoption: AdoptionRate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Developer {
    pub name: &'static str,
    pub team: &'static str,
    pub persona: Persona,
    pub skill: SkillLevel,
}

/// Impact score on the 1..=5 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ImpactScore(u8);

impl ImpactScore {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, ImpactError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ImpactError::ScoreOutOfRange(value))
        }
    }

    /// Score for a zero-based distribution bucket.
    ///
    /// Panics when `bucket` is not in 0..5; buckets come from fixed five-element tables.
    pub fn from_bucket(bucket: usize) -> Self {
        assert!(bucket < 5, "score bucket {bucket} out of range");
        Self(bucket as u8 + 1)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for ImpactScore {
    type Error = ImpactError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ImpactScore> for u8 {
    fn from(score: ImpactScore) -> Self {
        score.0
    }
}

impl fmt::Display for ImpactScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Share of a change written with AI assistance, in whole percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct AiUsage(u8);

impl AiUsage {
    pub fn new(percent: u8) -> Result<Self, ImpactError> {
        if percent <= 100 {
            Ok(Self(percent))
        } else {
            Err(ImpactError::AiUsageOutOfRange(percent))
        }
    }

    /// Clamp to 0..=100 and round to the nearest whole percent.
    pub fn from_f64(value: f64) -> Self {
        Self(value.clamp(0.0, 100.0).round() as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for AiUsage {
    type Error = ImpactError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AiUsage> for u8 {
    fn from(usage: AiUsage) -> Self {
        usage.0
    }
}

/// A synthesized pull request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub explanation: String,
    pub developer: String,
    pub team: String,
    pub project: String,
    pub impact_score: ImpactScore,
    pub ai_usage: AiUsage,
    pub date: NaiveDate,
    pub quarter: String,
    pub phase: Phase,
    pub lines_changed: u32,
    pub files_modified: u32,
}

impl Record {
    /// Display identifier, e.g. `pr-42`
    pub fn label(&self) -> String {
        format!("pr-{}", self.id)
    }

    /// True when the derived phase and quarter agree with the date.
    pub fn is_consistent(&self) -> bool {
        self.phase == Phase::from_date(self.date) && self.quarter == quarter_label(self.date)
    }
}

impl FromStr for Phase {
    type Err = ImpactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Phase::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ImpactError::unknown("phase", s))
    }
}
