//! Per-developer productivity summaries, flat and time-bucketed

use crate::period::{period_display, period_key, Granularity};
use crate::summary::summarize_work;
use impactlens_core::{find_developer, Record};
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::BTreeMap;
use tracing::debug;

/// Team reported for developers missing from the roster
pub const UNKNOWN_TEAM: &str = "Unknown Team";

/// Days the flat aggregation spreads record counts over
const FLAT_SPAN_DAYS: u32 = 365;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActivityLevel {
    High,
    Moderate,
    Low,
}

impl ActivityLevel {
    /// Classify by records per 30 days over a span of `span_days`.
    pub fn from_rate(count: usize, span_days: u32) -> Self {
        let per_month = count as f64 / f64::from(span_days.max(1)) * 30.0;
        if per_month >= 8.0 {
            ActivityLevel::High
        } else if per_month >= 4.0 {
            ActivityLevel::Moderate
        } else {
            ActivityLevel::Low
        }
    }

    /// Classify a raw count against the bands of one period.
    pub fn for_period(count: usize, granularity: Granularity) -> Self {
        let (high, moderate) = match granularity {
            Granularity::Weekly => (8, 4),
            Granularity::Monthly => (20, 10),
        };
        if count >= high {
            ActivityLevel::High
        } else if count >= moderate {
            ActivityLevel::Moderate
        } else {
            ActivityLevel::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityLevel::High => "High",
            ActivityLevel::Moderate => "Moderate",
            ActivityLevel::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodLabel {
    /// Sortable key, `YYYY-MM` or `YYYY-Wnn`
    pub key: String,
    /// `Jun 2025` or `Week 01, 2025`
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductivitySummary {
    pub developer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<PeriodLabel>,
    pub team: String,
    pub pr_count: usize,
    pub avg_impact_score: f64,
    pub total_impact_points: u32,
    pub avg_ai_usage: f64,
    /// Newest first
    pub prs: Vec<Record>,
    pub work_summary: String,
    pub top_impact_pr: Record,
    pub recent_activity: ActivityLevel,
}

impl ProductivitySummary {
    /// `Sarah Chen (Jun 2025)` for bucketed summaries, the bare name otherwise
    pub fn display_name(&self) -> String {
        match &self.period {
            Some(period) => format!("{} ({})", self.developer, period.display),
            None => self.developer.clone(),
        }
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Newest first; equal dates fall back to id so the order never depends on input order.
fn sort_newest_first(records: &mut [Record]) {
    records.sort_by(|a, b| b.date.cmp(&a.date).then(a.id.cmp(&b.id)));
}

/// Shared derivation for one non-empty group.
fn summarize_group(
    developer: &str,
    team: Option<String>,
    group: &[&Record],
    activity: impl FnOnce(usize) -> ActivityLevel,
    period: Option<PeriodLabel>,
) -> Option<ProductivitySummary> {
    let mut prs: Vec<Record> = group.iter().map(|r| (*r).clone()).collect();
    sort_newest_first(&mut prs);

    let first = prs.first()?;
    let team = team.unwrap_or_else(|| first.team.clone());

    let pr_count = prs.len();
    let total_impact_points: u32 = prs.iter().map(|r| u32::from(r.impact_score.get())).sum();
    let total_ai: u32 = prs.iter().map(|r| u32::from(r.ai_usage.get())).sum();

    let mut top = first;
    for record in &prs {
        if record.impact_score > top.impact_score {
            top = record;
        }
    }
    let top_impact_pr = top.clone();

    Some(ProductivitySummary {
        developer: developer.to_string(),
        period,
        team,
        pr_count,
        avg_impact_score: round_to(f64::from(total_impact_points) / pr_count as f64, 2),
        total_impact_points,
        avg_ai_usage: round_to(f64::from(total_ai) / pr_count as f64, 1),
        work_summary: summarize_work(&prs),
        top_impact_pr,
        recent_activity: activity(pr_count),
        prs,
    })
}

/// One summary per developer present in `records`, highest total impact first.
pub fn aggregate_flat(records: &[Record]) -> Vec<ProductivitySummary> {
    aggregate_flat_over(records, FLAT_SPAN_DAYS)
}

/// Flat aggregation with activity normalized over `span_days`.
pub fn aggregate_flat_over(records: &[Record], span_days: u32) -> Vec<ProductivitySummary> {
    let mut groups: BTreeMap<&str, Vec<&Record>> = BTreeMap::new();
    for record in records {
        groups.entry(record.developer.as_str()).or_default().push(record);
    }

    let mut summaries: Vec<ProductivitySummary> = groups
        .iter()
        .filter_map(|(developer, group)| {
            summarize_group(
                developer,
                None,
                group,
                |count| ActivityLevel::from_rate(count, span_days),
                None,
            )
        })
        .collect();

    summaries.sort_by_key(|s| Reverse(s.total_impact_points));
    debug!(
        records = records.len(),
        developers = summaries.len(),
        "flat aggregation"
    );
    summaries
}

/// One summary per (developer, period); newest period first, then highest total impact.
pub fn aggregate_by_period(
    records: &[Record],
    granularity: Granularity,
) -> Vec<ProductivitySummary> {
    let mut groups: BTreeMap<(&str, String), Vec<&Record>> = BTreeMap::new();
    for record in records {
        let key = period_key(record.date, granularity);
        groups
            .entry((record.developer.as_str(), key))
            .or_default()
            .push(record);
    }

    let mut summaries: Vec<ProductivitySummary> = groups
        .iter()
        .filter_map(|((developer, key), group)| {
            let team = find_developer(developer)
                .map(|d| d.team)
                .unwrap_or(UNKNOWN_TEAM);
            let label = PeriodLabel {
                key: key.clone(),
                display: period_display(group.first()?.date, granularity),
            };
            summarize_group(
                developer,
                Some(team.to_string()),
                group,
                |count| ActivityLevel::for_period(count, granularity),
                Some(label),
            )
        })
        .collect();

    summaries.sort_by(|a, b| {
        let a_key = a.period.as_ref().map(|p| p.key.as_str()).unwrap_or("");
        let b_key = b.period.as_ref().map(|p| p.key.as_str()).unwrap_or("");
        b_key
            .cmp(a_key)
            .then(b.total_impact_points.cmp(&a.total_impact_points))
    });
    debug!(
        records = records.len(),
        groups = summaries.len(),
        %granularity,
        "period aggregation"
    );
    summaries
}
