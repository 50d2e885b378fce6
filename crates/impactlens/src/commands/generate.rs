use super::load_dataset;
use crate::cli::DatasetArgs;

pub fn run(dataset: &DatasetArgs, limit: Option<usize>) -> anyhow::Result<()> {
    let (_, records) = load_dataset(dataset)?;
    let shown = &records[..limit.map_or(records.len(), |n| n.min(records.len()))];
    println!("{}", serde_json::to_string_pretty(shown)?);
    Ok(())
}
