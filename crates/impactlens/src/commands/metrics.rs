use super::{load_dataset, record_filter};
use crate::cli::{DatasetArgs, FilterArgs};
use impactlens_aggregate::{aggregate_flat, DashboardMetrics};
use impactlens_core::Record;

const LEADERBOARD_SIZE: usize = 5;

pub fn run(dataset: &DatasetArgs, filter: &FilterArgs) -> anyhow::Result<()> {
    let (config, records) = load_dataset(dataset)?;
    let selected = record_filter(filter, &config).apply(&records);
    println!("{}", build_report(&records, &selected));
    Ok(())
}

fn format_avg(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.2}"))
}

fn build_report(all: &[Record], filtered: &[Record]) -> String {
    if all.is_empty() {
        return "No records generated.".to_string();
    }

    let metrics = DashboardMetrics::compute(all, filtered);
    let mut sections = Vec::new();

    sections.push(format!(
        "Impact Report\n=============\n\
         Records: {} of {}\nAverage impact: {:.2}\n\
         AI-assisted: {}%\nHigh impact: {} ({}%)",
        metrics.filtered_records,
        metrics.total_records,
        metrics.avg_impact_score,
        metrics.ai_assisted_pct,
        metrics.high_impact_records,
        metrics.high_impact_pct
    ));

    let growth = metrics
        .volume_increase_pct
        .map_or_else(|| "n/a".to_string(), |p| format!("{p:+}%"));
    sections.push(format!(
        "\nBefore / After\n--------------\n\
         Pre-cursor: {} records, avg impact {}\n\
         Post-cursor: {} records, avg impact {}\n\
         Volume change: {}",
        metrics.pre_cursor_records,
        format_avg(metrics.pre_cursor_avg_impact),
        metrics.post_cursor_records,
        format_avg(metrics.post_cursor_avg_impact),
        growth
    ));

    let leaders: Vec<String> = aggregate_flat(filtered)
        .iter()
        .take(LEADERBOARD_SIZE)
        .enumerate()
        .map(|(i, s)| {
            format!(
                "{}. {} ({}) {} pts, {} PRs, {}",
                i + 1,
                s.developer,
                s.team,
                s.total_impact_points,
                s.pr_count,
                s.recent_activity.as_str()
            )
        })
        .collect();
    if !leaders.is_empty() {
        sections.push(format!(
            "\nTop Contributors\n----------------\n{}",
            leaders.join("\n")
        ));
    }

    sections.join("\n")
}
