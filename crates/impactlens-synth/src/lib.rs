//! Procedural synthesis of pull-request records

mod builder;
mod distribution;
mod synthesizer;
mod templates;

pub use builder::{build_dataset, DatasetBuilder};
pub use distribution::{sample_score, DistributionKey, Stage, TeamTier, POWER_USER_TEAMS};
pub use synthesizer::{base_ai_usage, sample_ai_usage, synthesize};
pub use templates::{explanations, templates, Template};
