use super::resolve_config;
use crate::cli::DatasetArgs;
use chrono::NaiveDate;
use impactlens_aggregate::{navigation_periods, Granularity};

pub fn run(
    dataset: &DatasetArgs,
    granularity: Granularity,
    count: usize,
    as_of: Option<NaiveDate>,
) -> anyhow::Result<()> {
    let as_of = match as_of {
        Some(date) => date,
        None => resolve_config(dataset)?.end,
    };
    for key in navigation_periods(as_of, granularity, count) {
        println!("{key}");
    }
    Ok(())
}
