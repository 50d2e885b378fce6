use super::{load_dataset, record_filter};
use crate::cli::{DatasetArgs, FilterArgs};
use impactlens_aggregate::{impact_trends, TrendGrouping, TrendPoint};
use impactlens_core::{developers, quarters_between, teams, GeneratorConfig, Record};

/// Quarters from the window start through the last date a record can carry.
fn quarter_axis(config: &GeneratorConfig) -> Vec<String> {
    quarters_between(config.start, config.last_record_date())
}

/// Everything of the grouping's kind when no entity was named.
fn default_entities(grouping: TrendGrouping, config: &GeneratorConfig) -> Vec<String> {
    match grouping {
        TrendGrouping::Developer => developers().iter().map(|d| d.name.to_string()).collect(),
        TrendGrouping::Team => teams().iter().map(|t| t.name.to_string()).collect(),
        TrendGrouping::Quarter => quarter_axis(config),
    }
}

fn trend_points(
    config: &GeneratorConfig,
    records: &[Record],
    grouping: TrendGrouping,
    entities: Vec<String>,
) -> Vec<TrendPoint> {
    let entities = if entities.is_empty() {
        default_entities(grouping, config)
    } else {
        entities
    };
    impact_trends(records, grouping, &entities, &quarter_axis(config))
}

pub fn run(
    dataset: &DatasetArgs,
    filter: &FilterArgs,
    grouping: TrendGrouping,
    entities: Vec<String>,
) -> anyhow::Result<()> {
    let (config, records) = load_dataset(dataset)?;
    let selected = record_filter(filter, &config).apply(&records);
    let points = trend_points(&config, &selected, grouping, entities);
    println!("{}", serde_json::to_string_pretty(&points)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use impactlens_core::SeededRandom;
    use impactlens_synth::DatasetBuilder;

    #[test]
    fn test_default_entities_cover_catalog() {
        let config = GeneratorConfig::new();
        assert_eq!(
            default_entities(TrendGrouping::Team, &config).len(),
            teams().len()
        );
        assert_eq!(
            default_entities(TrendGrouping::Developer, &config).len(),
            developers().len()
        );
        let quarters = default_entities(TrendGrouping::Quarter, &config);
        assert_eq!(quarters.first().map(String::as_str), Some("Q3 2024"));
        assert_eq!(quarters.last().map(String::as_str), Some("Q3 2025"));
    }

    #[test]
    fn test_final_week_spilling_into_next_quarter_is_charted() {
        let mut config = GeneratorConfig::new();
        config.start = "2025-09-29".parse().unwrap();
        config.end = config.start;
        let records = DatasetBuilder::new(config.clone())
            .unwrap()
            .build(&mut SeededRandom::new(1));

        let points = trend_points(&config, &records, TrendGrouping::Team, Vec::new());
        let quarters: Vec<&str> = points.iter().map(|p| p.quarter.as_str()).collect();
        assert_eq!(quarters, vec!["Q3 2025", "Q4 2025"]);

        for record in &records {
            let point = points.iter().find(|p| p.quarter == record.quarter).unwrap();
            assert!(
                point.values[&record.team].is_some(),
                "{} missing from {}",
                record.label(),
                record.quarter
            );
        }
    }
}
