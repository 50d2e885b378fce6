//! Static team and developer roster

use crate::types::Persona::{AiDependent, Conservative, EarlyAdopter, GradualAdopter};
use crate::types::SkillLevel::{Junior, Mid, Senior};
use crate::types::{AdoptionRate, Developer, Persona, SkillLevel, Team};

const TEAMS: &[Team] = &[
    Team {
        name: "Canvas Architecture Core",
        project: "Project Canvas",
        focus: "Real-time collaboration, state management, conflict resolution",
        adoption: AdoptionRate::High,
    },
    Team {
        name: "WebGL Performance Engine",
        project: "Project Canvas",
        focus: "Graphics optimization, rendering pipeline, memory management",
        adoption: AdoptionRate::High,
    },
    Team {
        name: "Multi-User Synchronization",
        project: "Project Canvas",
        focus: "Operational transforms, presence awareness, data sync",
        adoption: AdoptionRate::High,
    },
    Team {
        name: "Photoshop Core Engine",
        project: "Photoshop Web",
        focus: "C++ modernization, WebAssembly, AI features",
        adoption: AdoptionRate::Medium,
    },
    Team {
        name: "Illustrator Web Platform",
        project: "Illustrator Web",
        focus: "Browser vector rendering, collaborative editing",
        adoption: AdoptionRate::Medium,
    },
    Team {
        name: "Document Cloud Infrastructure",
        project: "Acrobat Web",
        focus: "PDF processing, security, enterprise features",
        adoption: AdoptionRate::Low,
    },
    Team {
        name: "Creative SDK Platform",
        project: "Creative SDK",
        focus: "Cross-app integrations, developer tools",
        adoption: AdoptionRate::Low,
    },
];

const fn dev(
    name: &'static str,
    team: &'static str,
    persona: Persona,
    skill: SkillLevel,
) -> Developer {
    Developer {
        name,
        team,
        persona,
        skill,
    }
}

const DEVELOPERS: &[Developer] = &[
    dev("Sarah Chen", "Canvas Architecture Core", EarlyAdopter, Senior),
    dev("David Kim", "Canvas Architecture Core", EarlyAdopter, Senior),
    dev("Priya Patel", "Canvas Architecture Core", GradualAdopter, Mid),
    dev("Marcus Rodriguez", "WebGL Performance Engine", EarlyAdopter, Senior),
    dev("Elena Vasquez", "WebGL Performance Engine", EarlyAdopter, Mid),
    dev("James Wilson", "WebGL Performance Engine", GradualAdopter, Senior),
    dev("Emma Thompson", "Multi-User Synchronization", GradualAdopter, Mid),
    dev("Raj Sharma", "Multi-User Synchronization", EarlyAdopter, Senior),
    dev("Lisa Chen", "Multi-User Synchronization", GradualAdopter, Junior),
    dev("Jordan Park", "Photoshop Core Engine", EarlyAdopter, Senior),
    dev("Alex Kim", "Photoshop Core Engine", GradualAdopter, Mid),
    dev("Riley Zhang", "Photoshop Core Engine", Conservative, Senior),
    dev("Taylor Swift", "Illustrator Web Platform", AiDependent, Junior),
    dev("Morgan Davis", "Illustrator Web Platform", GradualAdopter, Mid),
    dev("Casey Johnson", "Document Cloud Infrastructure", Conservative, Senior),
    dev("Jamie Lee", "Document Cloud Infrastructure", Conservative, Mid),
    dev("Quinn Adams", "Creative SDK Platform", Conservative, Senior),
    dev("Avery Brown", "Creative SDK Platform", GradualAdopter, Mid),
];

pub fn teams() -> &'static [Team] {
    TEAMS
}

pub fn developers() -> &'static [Developer] {
    DEVELOPERS
}

pub fn find_team(name: &str) -> Option<&'static Team> {
    TEAMS.iter().find(|t| t.name == name)
}

pub fn find_developer(name: &str) -> Option<&'static Developer> {
    DEVELOPERS.iter().find(|d| d.name == name)
}

/// Resolve a developer's team. Every roster developer points at a roster team.
pub fn team_of(developer: &Developer) -> Option<&'static Team> {
    find_team(developer.team)
}

/// Distinct project names in declaration order
pub fn projects() -> Vec<&'static str> {
    let mut seen = Vec::new();
    for team in TEAMS {
        if !seen.contains(&team.project) {
            seen.push(team.project);
        }
    }
    seen
}

pub fn teams_in_project(project: &str) -> Vec<&'static Team> {
    TEAMS.iter().filter(|t| t.project == project).collect()
}
