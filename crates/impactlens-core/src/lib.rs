//! Data model, reference catalog and shared plumbing for impact analytics

mod calendar;
mod catalog;
mod config;
mod error;
mod rng;
mod types;

pub use calendar::{quarter_label, quarters_between, POST_CURSOR_START, ROLLOUT_START};
pub use catalog::{developers, find_developer, find_team, projects, team_of, teams, teams_in_project};
pub use config::{GeneratorConfig, WeeklyVolume};
pub use error::{ImpactError, Result};
pub use rng::{RandomSource, SeededRandom};
pub use types::{
    AdoptionRate, AiUsage, Developer, ImpactScore, Persona, Phase, Record, SkillLevel, Team,
};
