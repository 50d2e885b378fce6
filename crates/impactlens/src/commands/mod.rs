pub mod catalog;
pub mod generate;
pub mod metrics;
pub mod navigate;
pub mod periods;
pub mod productivity;
pub mod trends;
pub mod version;

use crate::cli::{DatasetArgs, FilterArgs};
use impactlens_aggregate::RecordFilter;
use impactlens_core::{GeneratorConfig, Record, SeededRandom};
use impactlens_synth::DatasetBuilder;

/// Resolve the generator config: file first, then flag overrides.
pub fn resolve_config(args: &DatasetArgs) -> anyhow::Result<GeneratorConfig> {
    let mut config = match args.config {
        Some(ref path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::new(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(start) = args.start {
        config.start = start;
    }
    if let Some(end) = args.end {
        config.end = end;
    }
    config.validate()?;
    Ok(config)
}

pub fn load_dataset(args: &DatasetArgs) -> anyhow::Result<(GeneratorConfig, Vec<Record>)> {
    let config = resolve_config(args)?;
    let mut rng = match config.seed {
        Some(seed) => SeededRandom::new(seed),
        None => SeededRandom::from_entropy(),
    };
    let records = DatasetBuilder::new(config.clone())?.build(&mut rng);
    Ok((config, records))
}

pub fn record_filter(filter: &FilterArgs, config: &GeneratorConfig) -> RecordFilter {
    let mut out = RecordFilter::new(filter.as_of.unwrap_or(config.end));
    if let Some(ref team) = filter.team {
        out = out.with_team(team.clone());
    }
    if let Some(ref project) = filter.project {
        out = out.with_project(project.clone());
    }
    if let Some(range) = filter.range {
        out = out.with_range(range);
    }
    out
}
