use super::{load_dataset, record_filter};
use crate::cli::{DatasetArgs, FilterArgs};
use impactlens_aggregate::aggregate_flat;

pub fn run(dataset: &DatasetArgs, filter: &FilterArgs) -> anyhow::Result<()> {
    let (config, records) = load_dataset(dataset)?;
    let selected = record_filter(filter, &config).apply(&records);
    let summaries = aggregate_flat(&selected);
    tracing::info!(
        records = selected.len(),
        developers = summaries.len(),
        "productivity summaries"
    );
    println!("{}", serde_json::to_string_pretty(&summaries)?);
    Ok(())
}
