use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use impactlens_aggregate::{DateRange, Granularity, TrendGrouping};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "impactlens")]
#[command(version)]
#[command(about = "Synthetic pull-request impact analytics")]
pub struct Cli {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// How the dataset is generated
#[derive(Args, Debug, Clone, Default)]
pub struct DatasetArgs {
    /// Seed for a reproducible dataset
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// First week of the window (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub start: Option<NaiveDate>,

    /// Last week anchor of the window (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub end: Option<NaiveDate>,

    /// JSON generator config; flags override it
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Record selection shared by the reporting commands
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only this team
    #[arg(long)]
    pub team: Option<String>,

    /// Only teams of this project
    #[arg(long)]
    pub project: Option<String>,

    /// all-time, last-30-days, last-3-months, post-cursor-only, pre-cursor-only
    #[arg(long)]
    pub range: Option<DateRange>,

    /// Reference date for relative ranges (defaults to the window end)
    #[arg(long)]
    pub as_of: Option<NaiveDate>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the synthesized records as JSON
    Generate {
        /// Newest records only
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Per-developer productivity summaries
    Productivity {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Per-developer summaries bucketed by week or month
    Periods {
        #[arg(long, default_value = "monthly")]
        granularity: Granularity,

        /// Only this period key (e.g. 2025-06 or 2025-W01)
        #[arg(long)]
        period: Option<String>,

        /// Only these developers (repeatable)
        #[arg(long = "developer")]
        developers: Vec<String>,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// List recent period keys for navigation
    Navigate {
        #[arg(long, default_value = "monthly")]
        granularity: Granularity,

        /// Steps to walk back; weekly keys repeat across months and
        /// repeats are dropped, so fewer keys may be printed
        #[arg(long, default_value_t = 12)]
        count: usize,

        #[arg(long)]
        as_of: Option<NaiveDate>,
    },

    /// Average impact per quarter for selected entities
    Trends {
        #[arg(long, default_value = "team")]
        group_by: TrendGrouping,

        /// Entities to chart (repeatable); defaults to every team
        #[arg(long = "entity")]
        entities: Vec<String>,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Headline metrics report
    Metrics {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Print the team and developer roster
    Catalog,

    /// Print version information
    Version,
}
