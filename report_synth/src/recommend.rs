use assessment_schema::{DetailedScore, Domain, Recommendation};

use crate::templates::{self, RecommendationCopy};

/// Below this score a domain gets the remedial recommendation.
pub const REMEDIAL_BELOW: u8 = 70;

/// First score whose raw domain is one of `domains`.
pub(crate) fn first_in<'a>(scores: &'a [DetailedScore], domains: &[Domain]) -> Option<&'a DetailedScore> {
    scores.iter().find(|s| domains.contains(&s.domain))
}

fn remedial(score: &DetailedScore) -> bool {
    score.score.get() < REMEDIAL_BELOW
}

pub(crate) fn recommend(scores: &[DetailedScore]) -> Vec<Recommendation> {
    let mut picks: Vec<RecommendationCopy> = Vec::new();

    if let Some(attention) = first_in(scores, &[Domain::Attention]) {
        picks.push(if remedial(attention) {
            templates::ATTENTION_ENHANCEMENT
        } else {
            templates::MAINTAIN_ATTENTION
        });
    }

    if let Some(memory) = first_in(scores, &[Domain::WorkingMemory, Domain::Memory]) {
        picks.push(if remedial(memory) {
            templates::MEMORY_STRENGTHENING
        } else {
            templates::ADVANCED_MEMORY
        });
    }

    // Visual attention only ever adds the remedial item.
    if let Some(visual) = first_in(scores, &[Domain::VisualAttention]) {
        if remedial(visual) {
            picks.push(templates::VISUAL_DISCRIMINATION);
        }
    }

    picks.push(templates::REGULAR_MONITORING);
    picks.push(templates::COLLABORATIVE_APPROACH);

    picks.into_iter().map(RecommendationCopy::to_recommendation).collect()
}
