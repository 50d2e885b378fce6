//! Record and summary filters

use crate::productivity::ProductivitySummary;
use chrono::{Days, Months, NaiveDate};
use impactlens_core::{teams_in_project, ImpactError, Phase, Record, POST_CURSOR_START};
use std::str::FromStr;

/// Date range presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    #[default]
    AllTime,
    LastDays(u32),
    LastMonths(u32),
    PostCursorOnly,
    PreCursorOnly,
}

impl DateRange {
    /// Earliest date kept, for the cutoff-based presets
    fn cutoff(self, as_of: NaiveDate) -> Option<NaiveDate> {
        match self {
            DateRange::LastDays(days) => as_of.checked_sub_days(Days::new(u64::from(days))),
            DateRange::LastMonths(months) => as_of.checked_sub_months(Months::new(months)),
            DateRange::PostCursorOnly => Some(POST_CURSOR_START),
            DateRange::AllTime | DateRange::PreCursorOnly => None,
        }
    }

    pub fn contains(self, record: &Record, as_of: NaiveDate) -> bool {
        match self {
            DateRange::AllTime => true,
            DateRange::PreCursorOnly => record.phase == Phase::PreCursor,
            _ => self
                .cutoff(as_of)
                .map_or(true, |cutoff| record.date >= cutoff),
        }
    }
}

impl FromStr for DateRange {
    type Err = ImpactError;

    /// `all-time`, `last-<n>-days`, `last-<n>-months`, `post-cursor-only`, `pre-cursor-only`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(' ', "-");
        match normalized.as_str() {
            "all" | "all-time" => return Ok(DateRange::AllTime),
            "post-cursor" | "post-cursor-only" => return Ok(DateRange::PostCursorOnly),
            "pre-cursor" | "pre-cursor-only" => return Ok(DateRange::PreCursorOnly),
            _ => {}
        }

        let parts: Vec<&str> = normalized.split('-').collect();
        if let ["last", n, unit] = parts.as_slice() {
            if let Ok(n) = n.parse::<u32>() {
                match *unit {
                    "days" | "day" => return Ok(DateRange::LastDays(n)),
                    "months" | "month" => return Ok(DateRange::LastMonths(n)),
                    _ => {}
                }
            }
        }
        Err(ImpactError::unknown("date range", s))
    }
}

/// Team, project and date range filter over raw records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFilter {
    pub team: Option<String>,
    pub project: Option<String>,
    pub date_range: DateRange,
    /// Reference date for relative ranges
    pub as_of: NaiveDate,
}

impl RecordFilter {
    pub fn new(as_of: NaiveDate) -> Self {
        Self {
            team: None,
            project: None,
            date_range: DateRange::AllTime,
            as_of,
        }
    }

    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn with_range(mut self, range: DateRange) -> Self {
        self.date_range = range;
        self
    }

    pub fn matches(&self, record: &Record) -> bool {
        if let Some(ref team) = self.team {
            if &record.team != team {
                return false;
            }
        }
        if let Some(ref project) = self.project {
            if &record.project != project {
                return false;
            }
        }
        self.date_range.contains(record, self.as_of)
    }

    /// Matching records, input order preserved
    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        records
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect()
    }
}

/// Filter over productivity summaries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryFilter {
    pub team: Option<String>,
    /// Matches summaries whose team belongs to this project
    pub project: Option<String>,
    /// Empty keeps every developer
    pub developers: Vec<String>,
    /// Period key; flat summaries never match a period
    pub period: Option<String>,
}

impl SummaryFilter {
    pub fn matches(&self, summary: &ProductivitySummary) -> bool {
        if let Some(ref team) = self.team {
            if &summary.team != team {
                return false;
            }
        }
        if let Some(ref project) = self.project {
            if !teams_in_project(project)
                .iter()
                .any(|t| t.name == summary.team)
            {
                return false;
            }
        }
        if !self.developers.is_empty() && !self.developers.contains(&summary.developer) {
            return false;
        }
        if let Some(ref period) = self.period {
            if summary.period.as_ref().map(|p| &p.key) != Some(period) {
                return false;
            }
        }
        true
    }

    pub fn apply<'a>(&self, summaries: &'a [ProductivitySummary]) -> Vec<&'a ProductivitySummary> {
        summaries.iter().filter(|s| self.matches(s)).collect()
    }
}
