//! Keyword-based work summaries

use impactlens_core::Record;
use regex::Regex;
use std::sync::OnceLock;

pub const FALLBACK_SUMMARY: &str = "General development work";

const TOP_AREAS: usize = 3;

const WORK_AREAS: &[(&str, &str)] = &[
    (r"real-time|collaborative|sync", "real-time collaboration"),
    (r"webgl|rendering|graphics", "graphics optimization"),
    (r"performance|optimization|memory", "performance improvements"),
    (r"architecture|system|infrastructure", "system architecture"),
    (r"ui|interface|component", "UI components"),
    (r"api|endpoint|service", "API development"),
    (r"security|auth|permission", "security features"),
    (r"test|unit|integration", "testing infrastructure"),
    (r"deploy|build|pipeline", "deployment systems"),
    (r"bug|fix|issue", "bug fixes"),
    (r"webassembly|wasm", "WebAssembly integration"),
    (r"cursor|presence|indicator", "collaborative features"),
];

static WORK_AREA_RES: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();

fn work_areas() -> &'static [(Regex, &'static str)] {
    WORK_AREA_RES.get_or_init(|| {
        WORK_AREAS
            .iter()
            .map(|(pattern, term)| (Regex::new(&format!("(?i){pattern}")).unwrap(), *term))
            .collect()
    })
}

/// Top three work areas across record titles, most frequent first.
///
/// Equal counts keep declaration order. A title may count toward several areas.
pub fn summarize_work<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a Record>,
{
    let areas = work_areas();
    let mut counts = vec![0usize; areas.len()];

    for record in records {
        for (idx, (re, _)) in areas.iter().enumerate() {
            if re.is_match(&record.title) {
                counts[idx] += 1;
            }
        }
    }

    let mut ranked: Vec<(usize, usize)> = counts
        .into_iter()
        .enumerate()
        .filter(|&(_, count)| count > 0)
        .collect();
    ranked.sort_by_key(|&(_, count)| std::cmp::Reverse(count));

    if ranked.is_empty() {
        return FALLBACK_SUMMARY.to_string();
    }

    ranked
        .iter()
        .take(TOP_AREAS)
        .map(|&(idx, _)| areas[idx].1)
        .collect::<Vec<_>>()
        .join(", ")
}
