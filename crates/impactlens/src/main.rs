mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so JSON on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let dataset = &cli.dataset;

    match cli.command {
        Commands::Generate { limit } => commands::generate::run(dataset, limit),
        Commands::Productivity { filter } => commands::productivity::run(dataset, &filter),
        Commands::Periods {
            granularity,
            period,
            developers,
            filter,
        } => commands::periods::run(dataset, &filter, granularity, period, developers),
        Commands::Navigate {
            granularity,
            count,
            as_of,
        } => commands::navigate::run(dataset, granularity, count, as_of),
        Commands::Trends {
            group_by,
            entities,
            filter,
        } => commands::trends::run(dataset, &filter, group_by, entities),
        Commands::Metrics { filter } => commands::metrics::run(dataset, &filter),
        Commands::Catalog => commands::catalog::run(),
        Commands::Version => commands::version::run(),
    }
}
