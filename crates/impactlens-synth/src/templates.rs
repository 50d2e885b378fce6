//! Title, description and explanation text per impact score

use impactlens_core::ImpactScore;

/// A matched title and description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub title: &'static str,
    pub description: &'static str,
}

const fn t(title: &'static str, description: &'static str) -> Template {
    Template { title, description }
}

const TEMPLATES: [[Template; 5]; 5] = [
    // 1
    [
        t(
            "Update copyright year in footer",
            "Changed footer copyright from 2024 to 2025 across all application pages",
        ),
        t(
            "Fix typo in help documentation",
            "Corrected spelling error in the collaborative editing help documentation",
        ),
        t(
            "Remove unused CSS classes",
            "Cleaned up unused CSS classes reducing bundle size by 2KB",
        ),
        t(
            "Update package dependencies to latest versions",
            "Updated non-breaking package dependencies to their latest stable versions",
        ),
        t(
            "Fix spelling error in user interface text",
            "Fixed spelling error in tooltip text for the layer selection tool",
        ),
    ],
    // 2
    [
        t(
            "Fix tooltip positioning edge cases",
            "Corrected tooltip overflow behavior when elements are near viewport boundaries",
        ),
        t(
            "Update icon assets for new brand guidelines",
            "Updated all icon assets to align with new Adobe brand guidelines and design system",
        ),
        t(
            "Improve error messaging for network failures",
            "Enhanced error messages providing clearer guidance when network operations fail",
        ),
        t(
            "Add loading states for slow operations",
            "Added progressive loading indicators for operations taking longer than 2 seconds",
        ),
        t(
            "Fix responsive layout on mobile devices",
            "Fixed layout responsiveness issues affecting mobile and tablet user experience",
        ),
    ],
    // 3
    [
        t(
            "Add user preference sync across devices",
            "Cross-device synchronization of user preferences and workspace settings",
        ),
        t(
            "Implement offline mode for Canvas editing",
            "Offline editing capabilities with intelligent sync when connection restored",
        ),
        t(
            "Build notification system for collaborative changes",
            "Real-time notifications when collaborators make changes to shared documents",
        ),
        t(
            "Add keyboard shortcuts for power users",
            "Comprehensive keyboard shortcut system for professional designers and power users",
        ),
        t(
            "Implement undo/redo for collaborative sessions",
            "Advanced undo/redo system that works seamlessly in multi-user environments",
        ),
    ],
    // 4
    [
        t(
            "Optimize WebGL memory management for large artboards",
            "Memory pooling and garbage collection optimizations for handling 10K+ layer artboards",
        ),
        t(
            "Implement presence indicators for collaborative editing",
            "Real-time cursor positions, selection highlights, and user avatars for collaboration UX",
        ),
        t(
            "Add advanced caching layer for Canvas state",
            "Intelligent caching system reducing Canvas load times by 60% for complex documents",
        ),
        t(
            "Build real-time cursor synchronization",
            "Smooth cursor tracking and user presence visualization across collaborative sessions",
        ),
        t(
            "Optimize rendering pipeline for 10+ concurrent users",
            "Performance optimizations enabling smooth collaboration for large design teams",
        ),
    ],
    // 5
    [
        t(
            "Implement real-time collaborative state management",
            "Complete architectural redesign enabling multi-user collaboration with advanced conflict resolution",
        ),
        t(
            "Complete WebAssembly-based image processing pipeline",
            "Revolutionary performance improvement using WebAssembly for 10x faster image processing",
        ),
        t(
            "Redesign multi-user conflict resolution architecture",
            "Distributed system handling concurrent edits across thousands of simultaneous users",
        ),
        t(
            "Build distributed consensus system for Canvas",
            "Mission-critical infrastructure enabling real-time collaboration at enterprise scale",
        ),
        t(
            "Implement zero-downtime deployment pipeline",
            "Advanced deployment system ensuring zero-downtime releases for millions of users",
        ),
    ],
];

const EXPLANATIONS: [[&str; 4]; 5] = [
    [
        "Trivial text change. Minimal effort required with no technical complexity.",
        "Simple maintenance task. No architectural impact, minimal effort required.",
        "Basic housekeeping update. Trivial change with no functional impact.",
        "Cosmetic update requiring minimal technical work. No business logic affected.",
    ],
    [
        "Minor bug fix with limited scope. Affects UI polish but doesn't introduce new functionality or architectural changes.",
        "Small improvement in user experience. Limited scope with straightforward implementation.",
        "Bug fix addressing edge case scenarios. Minimal risk with targeted improvement.",
        "UI enhancement with limited scope. Simple implementation addressing specific user feedback.",
    ],
    [
        "User-visible feature improving collaboration UX. Moderate scope affecting UI layer and data streams, standard implementation complexity.",
        "Solid feature addition enhancing user workflow. Reasonable scope with good technical execution.",
        "Quality of life improvement for end users. Standard implementation with clear user benefit.",
        "Workflow enhancement addressing user feedback. Moderate complexity with positive user impact.",
    ],
    [
        "Significant performance improvement addressing major user pain points. Required deep technical knowledge and complex optimization patterns.",
        "Important user experience enhancement affecting collaboration workflows. Moderate architectural complexity with measurable user impact.",
        "Performance optimization enabling better user experience at scale. Technical complexity with clear business value.",
        "User-facing feature with significant workflow improvements. Good technical execution solving real problems.",
    ],
    [
        "Critical infrastructure work enabling multi-user collaboration. Touches core architecture, introduces distributed consensus algorithms, and unblocks entire feature sets.",
        "Revolutionary performance improvement. Complex integration affecting entire workflow, enables new real-time capabilities previously impossible.",
        "Mission-critical scalability work. Handles enterprise-scale loads and unblocks major customer deployments.",
        "Foundational architecture enabling next-generation features. High complexity with broad system impact.",
    ],
];

pub fn templates(score: ImpactScore) -> &'static [Template; 5] {
    &TEMPLATES[usize::from(score.get()) - 1]
}

pub fn explanations(score: ImpactScore) -> &'static [&'static str; 4] {
    &EXPLANATIONS[usize::from(score.get()) - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_score() {
        let top = ImpactScore::new(5).unwrap();
        assert_eq!(
            templates(top)[0].title,
            "Implement real-time collaborative state management"
        );
        assert!(explanations(top)[0].starts_with("Critical infrastructure"));

        let low = ImpactScore::new(1).unwrap();
        assert_eq!(templates(low)[0].title, "Update copyright year in footer");
        assert!(explanations(low)[0].starts_with("Trivial"));
    }

    #[test]
    fn test_no_empty_text() {
        for row in TEMPLATES.iter() {
            for template in row {
                assert!(!template.title.is_empty());
                assert!(!template.description.is_empty());
            }
        }
        assert!(EXPLANATIONS.iter().flatten().all(|e| !e.is_empty()));
    }
}
