//! Headline dashboard metrics

use impactlens_core::{Phase, Record};
use serde::Serialize;

/// Records above this AI usage count as AI-assisted
const AI_ASSISTED_ABOVE: u8 = 30;
const HIGH_IMPACT_FROM: u8 = 4;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardMetrics {
    pub total_records: usize,
    pub filtered_records: usize,
    pub avg_impact_score: f64,
    pub ai_assisted_pct: u32,
    pub high_impact_records: usize,
    pub high_impact_pct: u32,
    pub pre_cursor_records: usize,
    pub post_cursor_records: usize,
    /// Whole-dataset growth over the pre-cursor volume
    pub volume_increase_pct: Option<i64>,
    pub pre_cursor_avg_impact: Option<f64>,
    pub post_cursor_avg_impact: Option<f64>,
}

fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u32
}

fn mean_impact<'a>(records: impl Iterator<Item = &'a Record>) -> Option<f64> {
    let (sum, count) = records.fold((0u32, 0usize), |(sum, count), r| {
        (sum + u32::from(r.impact_score.get()), count + 1)
    });
    (count > 0).then(|| (f64::from(sum) / count as f64 * 100.0).round() / 100.0)
}

impl DashboardMetrics {
    /// `filtered` is the subset currently selected; phase comparisons use `all`.
    pub fn compute(all: &[Record], filtered: &[Record]) -> Self {
        let high = filtered
            .iter()
            .filter(|r| r.impact_score.get() >= HIGH_IMPACT_FROM)
            .count();
        let assisted = filtered
            .iter()
            .filter(|r| r.ai_usage.get() > AI_ASSISTED_ABOVE)
            .count();

        let pre = all.iter().filter(|r| r.phase == Phase::PreCursor);
        let post = all.iter().filter(|r| r.phase == Phase::PostCursor);
        let pre_count = pre.clone().count();
        let post_count = post.clone().count();

        let volume_increase_pct = (pre_count > 0).then(|| {
            ((all.len() as f64 - pre_count as f64) / pre_count as f64 * 100.0).round() as i64
        });

        Self {
            total_records: all.len(),
            filtered_records: filtered.len(),
            avg_impact_score: mean_impact(filtered.iter()).unwrap_or(0.0),
            ai_assisted_pct: percent(assisted, filtered.len()),
            high_impact_records: high,
            high_impact_pct: percent(high, filtered.len()),
            pre_cursor_records: pre_count,
            post_cursor_records: post_count,
            volume_increase_pct,
            pre_cursor_avg_impact: mean_impact(pre),
            post_cursor_avg_impact: mean_impact(post),
        }
    }
}
