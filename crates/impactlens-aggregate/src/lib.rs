//! Productivity aggregation, filtering and dashboard metrics over synthesized records

mod filter;
mod metrics;
mod period;
mod productivity;
mod summary;
mod trends;

pub use filter::{DateRange, RecordFilter, SummaryFilter};
pub use metrics::DashboardMetrics;
pub use period::{navigation_periods, period_display, period_key, Granularity};
pub use productivity::{
    aggregate_by_period, aggregate_flat, aggregate_flat_over, ActivityLevel, PeriodLabel,
    ProductivitySummary, UNKNOWN_TEAM,
};
pub use summary::{summarize_work, FALLBACK_SUMMARY};
pub use trends::{impact_trends, TrendGrouping, TrendPoint};
