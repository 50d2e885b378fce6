//! Period keys for time-bucketed aggregation
//!
//! Weekly keys number weeks by the Monday's day of month (`ceil(day / 7)`), so
//! numbering restarts every month and is not an ISO week number. Navigation and
//! period filters depend on this exact scheme.

use chrono::{Datelike, Days, Months, NaiveDate};
use impactlens_core::ImpactError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Weekly,
    Monthly,
}

impl Granularity {
    pub fn as_str(self) -> &'static str {
        match self {
            Granularity::Weekly => "weekly",
            Granularity::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = ImpactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weekly" => Ok(Granularity::Weekly),
            "monthly" => Ok(Granularity::Monthly),
            other => Err(ImpactError::unknown("granularity", other)),
        }
    }
}

/// Monday on or before `date`
fn monday_of(date: NaiveDate) -> NaiveDate {
    let back = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}

fn week_of_month(day: u32) -> u32 {
    day.div_ceil(7)
}

/// `YYYY-MM` or `YYYY-Wnn`
pub fn period_key(date: NaiveDate, granularity: Granularity) -> String {
    match granularity {
        Granularity::Monthly => format!("{}-{:02}", date.year(), date.month()),
        Granularity::Weekly => {
            let monday = monday_of(date);
            format!("{}-W{:02}", monday.year(), week_of_month(monday.day()))
        }
    }
}

/// `Week nn, YYYY` or `Mon YYYY`
pub fn period_display(date: NaiveDate, granularity: Granularity) -> String {
    match granularity {
        Granularity::Monthly => date.format("%b %Y").to_string(),
        Granularity::Weekly => {
            let monday = monday_of(date);
            format!("Week {:02}, {}", week_of_month(monday.day()), monday.year())
        }
    }
}

/// Distinct period keys counting back `count` steps from `as_of`, newest first.
///
/// Weekly steps are seven days; because week numbers restart each month a
/// key can recur, and only its first occurrence is kept.
pub fn navigation_periods(as_of: NaiveDate, granularity: Granularity, count: usize) -> Vec<String> {
    let mut keys: Vec<String> = Vec::with_capacity(count);
    for step in 0..count as u32 {
        let date = match granularity {
            Granularity::Weekly => as_of.checked_sub_days(Days::new(u64::from(step) * 7)),
            Granularity::Monthly => as_of
                .with_day(1)
                .and_then(|first| first.checked_sub_months(Months::new(step))),
        };
        let Some(date) = date else {
            break;
        };
        let key = period_key(date, granularity);
        if !keys.contains(&key) {
            keys.push(key);
        }
    }
    keys
}
