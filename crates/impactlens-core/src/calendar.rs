//! Phase cutoffs and quarter labels

use chrono::{Datelike, NaiveDate};

pub(crate) const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid calendar constant"),
    }
}

/// First day of the assistant rollout
pub const ROLLOUT_START: NaiveDate = ymd(2025, 2, 1);

/// First day after the rollout completed
pub const POST_CURSOR_START: NaiveDate = ymd(2025, 4, 1);

fn quarter_of(month: u32) -> u32 {
    (month - 1) / 3 + 1
}

/// `"Q<n> <year>"` for the quarter containing `date`
pub fn quarter_label(date: NaiveDate) -> String {
    format!("Q{} {}", quarter_of(date.month()), date.year())
}

/// Every quarter label from the one containing `start` to the one containing `end`, oldest first.
pub fn quarters_between(start: NaiveDate, end: NaiveDate) -> Vec<String> {
    let mut labels = Vec::new();
    let (mut year, mut quarter) = (start.year(), quarter_of(start.month()));
    let last = (end.year(), quarter_of(end.month()));

    while (year, quarter) <= last {
        labels.push(format!("Q{quarter} {year}"));
        if quarter == 4 {
            year += 1;
            quarter = 1;
        } else {
            quarter += 1;
        }
    }
    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_label() {
        assert_eq!(quarter_label(ymd(2025, 2, 14)), "Q1 2025");
        assert_eq!(quarter_label(ymd(2025, 4, 1)), "Q2 2025");
        assert_eq!(quarter_label(ymd(2024, 9, 30)), "Q3 2024");
        assert_eq!(quarter_label(ymd(2024, 12, 31)), "Q4 2024");
    }

    #[test]
    fn test_quarters_between_default_window() {
        let quarters = quarters_between(ymd(2024, 7, 1), ymd(2025, 7, 31));
        assert_eq!(
            quarters,
            vec!["Q3 2024", "Q4 2024", "Q1 2025", "Q2 2025", "Q3 2025"]
        );
    }

    #[test]
    fn test_quarters_between_inverted_is_empty() {
        assert!(quarters_between(ymd(2025, 7, 1), ymd(2024, 7, 1)).is_empty());
    }
}
