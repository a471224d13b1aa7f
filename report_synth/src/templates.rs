//! Fixed report copy. Stored reports are compared byte-for-byte, so every
//! string here is part of the output format.

use assessment_schema::{Percent, Recommendation};

pub const STRENGTHS_FALLBACK: &str = "Assessment shows developing skills across all domains";
pub const DEVELOPMENT_FALLBACK: &str = "Continue monitoring development across all cognitive areas";

pub fn strength_line(name: &str, score: Percent) -> String {
    format!("{name}: Demonstrates strong capability with {score}% accuracy")
}

pub fn development_line(name: &str, score: Percent) -> String {
    format!("{name}: Shows room for improvement with {score}% accuracy")
}

// --- per-domain analysis openings ---

pub fn excellent_opening(name: &str) -> String {
    format!("Excellent performance in {}. ", name.to_lowercase())
}

pub fn good_opening(name: &str) -> String {
    format!(
        "Good performance in {} with minor areas for enhancement. ",
        name.to_lowercase()
    )
}

pub fn moderate_opening(name: &str) -> String {
    format!(
        "Moderate performance in {}. Additional practice recommended. ",
        name.to_lowercase()
    )
}

pub fn needs_development_opening(name: &str) -> String {
    format!("{name} shows significant opportunity for development. ")
}

// --- per-game fact sentences ---

pub fn focus_tap_fact(hits: &str, rounds: &str, premature: Option<&str>) -> String {
    match premature {
        Some(false_taps) => format!(
            "Child achieved {hits} successful taps out of {rounds} rounds, with {false_taps} premature response(s)."
        ),
        None => format!("Child achieved {hits} successful taps out of {rounds} rounds."),
    }
}

pub fn spot_difference_fact(correct: &str, rounds: &str) -> String {
    format!("Successfully identified differences in {correct} out of {rounds} rounds.")
}

pub fn memory_path_fact(max_sequence: &str, correct_rounds: &str) -> String {
    format!(
        "Recalled sequences up to {max_sequence} items, completing {correct_rounds} rounds successfully."
    )
}

// --- executive summary ---

pub fn summary_opening(name: &str, age: u32) -> String {
    format!("{name}, age {age}, completed a comprehensive game-based cognitive assessment. ")
}

pub fn summary_excellent(avg: Percent) -> String {
    format!(
        "The child demonstrates excellent cognitive capabilities across all assessed domains, with an average performance of {avg}%. "
    )
}

pub fn summary_good(avg: Percent) -> String {
    format!(
        "The child shows good cognitive development with an average performance of {avg}%, with specific areas identified for continued growth. "
    )
}

pub fn summary_moderate(avg: Percent) -> String {
    format!(
        "The child displays moderate cognitive performance averaging {avg}%, with several areas benefiting from targeted interventions. "
    )
}

pub fn summary_needs_development(avg: Percent) -> String {
    format!(
        "The child's assessment reveals significant opportunities for cognitive development, with an average performance of {avg}%. "
    )
}

pub fn summary_strength_count(n: usize) -> String {
    format!("Notable strengths include {n} domain(s) with excellent performance. ")
}

pub fn summary_development_count(n: usize) -> String {
    format!("Development focus recommended in {n} area(s). ")
}

pub const SUMMARY_CLOSING: &str = "This assessment provides a snapshot of current cognitive functioning and should be interpreted within the broader context of the child's overall development.";

// --- recommendations ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationCopy {
    pub title: &'static str,
    pub description: &'static str,
}

impl RecommendationCopy {
    pub fn to_recommendation(self) -> Recommendation {
        Recommendation {
            title: self.title.to_string(),
            description: self.description.to_string(),
        }
    }
}

pub const ATTENTION_ENHANCEMENT: RecommendationCopy = RecommendationCopy {
    title: "Attention Enhancement Activities",
    description: "Engage in focused activities like puzzles, matching games, and timed challenges to improve sustained attention and reduce distractibility.",
};

pub const MAINTAIN_ATTENTION: RecommendationCopy = RecommendationCopy {
    title: "Maintain Attention Skills",
    description: "Continue with challenging attention-based activities to maintain strong focus capabilities.",
};

pub const MEMORY_STRENGTHENING: RecommendationCopy = RecommendationCopy {
    title: "Memory Strengthening Exercises",
    description: "Practice memory games, storytelling recall, and sequential activities to enhance working memory capacity.",
};

pub const ADVANCED_MEMORY: RecommendationCopy = RecommendationCopy {
    title: "Advanced Memory Challenges",
    description: "Introduce more complex memory tasks and longer sequences to further develop memory skills.",
};

pub const VISUAL_DISCRIMINATION: RecommendationCopy = RecommendationCopy {
    title: "Visual Discrimination Activities",
    description: "Include spot-the-difference games, pattern recognition, and visual sorting activities to improve visual processing.",
};

pub const REGULAR_MONITORING: RecommendationCopy = RecommendationCopy {
    title: "Regular Assessment & Monitoring",
    description: "Schedule follow-up assessment in 3-4 months to track progress and adjust intervention strategies as needed.",
};

pub const COLLABORATIVE_APPROACH: RecommendationCopy = RecommendationCopy {
    title: "Collaborative Approach",
    description: "Maintain communication between parents, educators, and specialists to ensure consistent support across all environments.",
};

// --- next steps ---

pub const NEXT_STEPS: [&str; 5] = [
    "Review this report with parents/guardians to discuss findings and recommendations",
    "Implement suggested activities and interventions consistently at home and school",
    "Monitor progress through informal observation and tracking of skill development",
    "Schedule follow-up assessment in 3-4 months to evaluate progress",
    "Consult with educational or developmental specialists if concerns persist",
];

pub const DISCLAIMER: &str = "This report is generated using game-based learning analytics and should be used as a supplementary tool. It is not a substitute for professional psychological or educational assessment. For comprehensive evaluation, please consult with qualified professionals.";
