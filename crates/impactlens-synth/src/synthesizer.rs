//! Single-record synthesis

use crate::distribution::{sample_score, DistributionKey};
use crate::templates::{explanations, templates};
use chrono::NaiveDate;
use impactlens_core::{
    quarter_label, team_of, AiUsage, Developer, ImpactScore, Persona, Phase, RandomSource, Record,
};

const AI_NOISE: f64 = 10.0;
const LOW_PAYOFF_NUDGE: f64 = 5.0;

/// Expected AI usage (percent) before noise
pub fn base_ai_usage(persona: Persona, phase: Phase) -> f64 {
    match (persona, phase) {
        (_, Phase::PreCursor) => 0.0,
        (Persona::EarlyAdopter, _) => 70.0,
        (Persona::AiDependent, _) => 85.0,
        (Persona::GradualAdopter, Phase::CursorRollout) => 35.0,
        (Persona::GradualAdopter, Phase::PostCursor) => 55.0,
        (Persona::Conservative, Phase::CursorRollout) => 5.0,
        (Persona::Conservative, Phase::PostCursor) => 20.0,
    }
}

pub fn sample_ai_usage(
    persona: Persona,
    phase: Phase,
    score: ImpactScore,
    rng: &mut dyn RandomSource,
) -> AiUsage {
    let mut usage = base_ai_usage(persona, phase);
    // heavy use, low payoff
    if persona == Persona::AiDependent && score.get() <= 2 {
        usage += LOW_PAYOFF_NUDGE;
    }
    usage += rng.uniform(-AI_NOISE, AI_NOISE);
    AiUsage::from_f64(usage)
}

/// Produce one complete record for `developer` on `date`.
///
/// `phase` must be the phase of `date`; a mismatch is a programming error and panics.
pub fn synthesize(
    developer: &Developer,
    date: NaiveDate,
    phase: Phase,
    id: u64,
    rng: &mut dyn RandomSource,
) -> Record {
    assert_eq!(
        phase,
        Phase::from_date(date),
        "record pr-{id} dated {date} synthesized with phase {phase}"
    );
    let team = team_of(developer).unwrap_or_else(|| {
        panic!(
            "developer {} references unknown team {}",
            developer.name, developer.team
        )
    });

    let key = DistributionKey::for_developer(developer, phase);
    let impact_score = sample_score(key.weights(), rng);
    let ai_usage = sample_ai_usage(developer.persona, phase, impact_score, rng);

    let pairs = templates(impact_score);
    let template = pairs[rng.pick_index(pairs.len())];
    let reasons = explanations(impact_score);
    let explanation = reasons[rng.pick_index(reasons.len())];

    let score = u32::from(impact_score.get());
    let lines_changed = rng.uniform(50.0, 1050.0).round() as u32 * score;
    let files_modified = rng.uniform(1.0, 21.0).round() as u32 * score.saturating_sub(1).max(1);

    Record {
        id,
        title: template.title.to_string(),
        description: template.description.to_string(),
        explanation: explanation.to_string(),
        developer: developer.name.to_string(),
        team: team.name.to_string(),
        project: team.project.to_string(),
        impact_score,
        ai_usage,
        date,
        quarter: quarter_label(date),
        phase,
        lines_changed,
        files_modified,
    }
}
