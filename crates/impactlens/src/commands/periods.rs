use super::{load_dataset, record_filter};
use crate::cli::{DatasetArgs, FilterArgs};
use impactlens_aggregate::{aggregate_by_period, Granularity, SummaryFilter};

pub fn run(
    dataset: &DatasetArgs,
    filter: &FilterArgs,
    granularity: Granularity,
    period: Option<String>,
    developers: Vec<String>,
) -> anyhow::Result<()> {
    let (config, records) = load_dataset(dataset)?;
    let selected = record_filter(filter, &config).apply(&records);
    let summaries = aggregate_by_period(&selected, granularity);

    let view = SummaryFilter {
        developers,
        period,
        ..Default::default()
    };
    let shown = view.apply(&summaries);
    tracing::info!(
        granularity = %granularity,
        total = summaries.len(),
        shown = shown.len(),
        "period summaries"
    );
    println!("{}", serde_json::to_string_pretty(&shown)?);
    Ok(())
}
