use chrono::NaiveDate;
use impactlens_core::{
    find_developer, quarter_label, AiUsage, GeneratorConfig, ImpactScore, Phase, Record,
    SeededRandom,
};
use impactlens_synth::DatasetBuilder;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn sample_config() -> GeneratorConfig {
    GeneratorConfig {
        seed: Some(42),
        ..GeneratorConfig::new()
    }
}

pub fn seeded_dataset(seed: u64) -> Vec<Record> {
    DatasetBuilder::new(sample_config())
        .unwrap()
        .build(&mut SeededRandom::new(seed))
}

pub fn sample_dataset() -> Vec<Record> {
    seeded_dataset(42)
}

/// Hand-built record for a catalog developer.
pub fn sample_record(id: u64, developer: &str, on: NaiveDate, score: u8, title: &str) -> Record {
    let dev = find_developer(developer).unwrap();
    Record {
        id,
        title: title.to_string(),
        description: String::new(),
        explanation: String::new(),
        developer: dev.name.to_string(),
        team: dev.team.to_string(),
        project: String::new(),
        impact_score: ImpactScore::new(score).unwrap(),
        ai_usage: AiUsage::new(40).unwrap(),
        date: on,
        quarter: quarter_label(on),
        phase: Phase::from_date(on),
        lines_changed: 100,
        files_modified: 2,
    }
}
