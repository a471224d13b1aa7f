use assessment_schema::{Domain, GameResult, Percent};
use serde::Serialize;

/// Headline score per area, as shown on a student's profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LearningSnapshot {
    pub attention: Option<Percent>,
    pub memory: Option<Percent>,
    pub processing: Option<Percent>,
    pub impulse: Option<Percent>,
}

fn first_accuracy(results: &[GameResult], domains: &[Domain]) -> Option<Percent> {
    results
        .iter()
        .find(|r| domains.contains(&r.domain))
        .map(|r| r.accuracy)
}

pub fn learning_snapshot(results: &[GameResult]) -> LearningSnapshot {
    LearningSnapshot {
        attention: first_accuracy(results, &[Domain::Attention]),
        memory: first_accuracy(results, &[Domain::WorkingMemory, Domain::Memory]),
        processing: first_accuracy(results, &[Domain::Processing, Domain::VisualAttention]),
        impulse: first_accuracy(results, &[Domain::ImpulseControl]),
    }
}
