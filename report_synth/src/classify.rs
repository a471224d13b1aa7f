use assessment_schema::{DetailedScore, Percent};

use crate::templates;

/// Where a domain score lands in the strengths / development lists.
///
/// Scores in `70..80` are satisfactory and appear in neither list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standing {
    Strength,
    Development,
    Unremarked,
}

impl Standing {
    pub const STRENGTH_FROM: u8 = 80;
    pub const DEVELOPMENT_BELOW: u8 = 70;

    pub fn of(score: Percent) -> Self {
        match score.get() {
            s if s >= Self::STRENGTH_FROM => Standing::Strength,
            s if s < Self::DEVELOPMENT_BELOW => Standing::Development,
            _ => Standing::Unremarked,
        }
    }
}

/// Narrative tier used by the per-domain analysis and the executive summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceTier {
    Excellent,
    Good,
    Moderate,
    NeedsDevelopment,
}

impl PerformanceTier {
    pub const EXCELLENT_FROM: u8 = 80;
    pub const GOOD_FROM: u8 = 70;
    pub const MODERATE_FROM: u8 = 60;

    pub fn of(score: Percent) -> Self {
        match score.get() {
            s if s >= Self::EXCELLENT_FROM => PerformanceTier::Excellent,
            s if s >= Self::GOOD_FROM => PerformanceTier::Good,
            s if s >= Self::MODERATE_FROM => PerformanceTier::Moderate,
            _ => PerformanceTier::NeedsDevelopment,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Classification {
    pub strengths: Vec<String>,
    pub development: Vec<String>,
}

impl Classification {
    pub(crate) fn strengths_or_fallback(&self) -> Vec<String> {
        or_fallback(&self.strengths, templates::STRENGTHS_FALLBACK)
    }

    pub(crate) fn development_or_fallback(&self) -> Vec<String> {
        or_fallback(&self.development, templates::DEVELOPMENT_FALLBACK)
    }
}

fn or_fallback(lines: &[String], fallback: &str) -> Vec<String> {
    if lines.is_empty() {
        vec![fallback.to_string()]
    } else {
        lines.to_vec()
    }
}

pub(crate) fn classify(scores: &[DetailedScore]) -> Classification {
    let mut out = Classification::default();
    for s in scores {
        match Standing::of(s.score) {
            Standing::Strength => out.strengths.push(templates::strength_line(&s.name, s.score)),
            Standing::Development => out
                .development
                .push(templates::development_line(&s.name, s.score)),
            Standing::Unremarked => {}
        }
    }
    out
}
