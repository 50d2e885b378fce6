//! Average impact per quarter for selected developers, teams or quarters

use impactlens_core::{ImpactError, Record};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendGrouping {
    Developer,
    Team,
    Quarter,
}

impl TrendGrouping {
    fn entity_of(self, record: &Record) -> &str {
        match self {
            TrendGrouping::Developer => &record.developer,
            TrendGrouping::Team => &record.team,
            TrendGrouping::Quarter => &record.quarter,
        }
    }
}

impl FromStr for TrendGrouping {
    type Err = ImpactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "developer" => Ok(TrendGrouping::Developer),
            "team" => Ok(TrendGrouping::Team),
            "quarter" => Ok(TrendGrouping::Quarter),
            other => Err(ImpactError::unknown("trend grouping", other)),
        }
    }
}

/// One chart point: a quarter and each entity's average impact
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub quarter: String,
    /// `None` when the entity has no records in the quarter
    pub values: BTreeMap<String, Option<f64>>,
}

/// Trend series over `quarters` (chronological, gaps included).
pub fn impact_trends(
    records: &[Record],
    grouping: TrendGrouping,
    entities: &[String],
    quarters: &[String],
) -> Vec<TrendPoint> {
    let mut by_quarter: HashMap<&str, Vec<&Record>> = HashMap::new();
    for record in records {
        by_quarter.entry(record.quarter.as_str()).or_default().push(record);
    }

    quarters
        .iter()
        .map(|quarter| {
            let in_quarter = by_quarter
                .get(quarter.as_str())
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            let values = entities
                .iter()
                .map(|entity| {
                    let scores: Vec<u32> = in_quarter
                        .iter()
                        .filter(|r| grouping.entity_of(r) == entity.as_str())
                        .map(|r| u32::from(r.impact_score.get()))
                        .collect();
                    let avg = (!scores.is_empty()).then(|| {
                        let mean = f64::from(scores.iter().sum::<u32>()) / scores.len() as f64;
                        (mean * 100.0).round() / 100.0
                    });
                    (entity.clone(), avg)
                })
                .collect();
            TrendPoint {
                quarter: quarter.clone(),
                values,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use impactlens_core::{quarter_label, quarters_between, AiUsage, ImpactScore, Phase};

    fn record(team: &str, date: (i32, u32, u32), score: u8) -> Record {
        let date = NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap();
        Record {
            id: 1,
            title: String::new(),
            description: String::new(),
            explanation: String::new(),
            developer: "Someone".to_string(),
            team: team.to_string(),
            project: String::new(),
            impact_score: ImpactScore::new(score).unwrap(),
            ai_usage: AiUsage::new(0).unwrap(),
            date,
            quarter: quarter_label(date),
            phase: Phase::from_date(date),
            lines_changed: 0,
            files_modified: 0,
        }
    }

    #[test]
    fn test_team_trend_with_gaps() {
        let records = vec![
            record("Canvas Architecture Core", (2024, 8, 1), 2),
            record("Canvas Architecture Core", (2024, 9, 1), 3),
            record("Canvas Architecture Core", (2025, 5, 1), 5),
            record("Creative SDK Platform", (2025, 5, 2), 3),
        ];
        let quarters = quarters_between(
            NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 7, 31).unwrap(),
        );
        let entities = vec![
            "Canvas Architecture Core".to_string(),
            "Creative SDK Platform".to_string(),
        ];
        let points = impact_trends(&records, TrendGrouping::Team, &entities, &quarters);

        assert_eq!(points.len(), 5);
        assert_eq!(points[0].quarter, "Q3 2024");
        assert_eq!(points[0].values["Canvas Architecture Core"], Some(2.5));
        assert_eq!(points[0].values["Creative SDK Platform"], None);
        assert_eq!(points[1].values["Canvas Architecture Core"], None);
        assert_eq!(points[3].quarter, "Q2 2025");
        assert_eq!(points[3].values["Canvas Architecture Core"], Some(5.0));
        assert_eq!(points[3].values["Creative SDK Platform"], Some(3.0));
    }

    #[test]
    fn test_grouping_parse() {
        assert_eq!("team".parse::<TrendGrouping>().unwrap(), TrendGrouping::Team);
        assert!("project".parse::<TrendGrouping>().is_err());
    }
}
